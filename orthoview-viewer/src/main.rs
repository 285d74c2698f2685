use iced::keyboard::{self, key};
use iced::widget::{button, canvas, column, container, horizontal_space, row, stack, text};
use iced::{Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use orthoview_core::{ImageView, ViewportEvent};

mod config;
mod document;
mod image_canvas;
mod loader;
mod sidebar;
mod status;

use config::{Config, ThemeChoice};
use document::ImageDocument;
use image_canvas::{CanvasInput, ImageCanvas};
use sidebar::Sidebar;
use status::Status;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .init();

    iced::application("orthoview", ImageViewer::update, ImageViewer::view)
        .theme(ImageViewer::theme)
        .subscription(ImageViewer::subscription)
        .run_with(move || ImageViewer::new(config))
        .context("Failed to run the viewer window")
}

#[derive(Debug, Clone)]
enum Message {
    OpenFile,
    FilePicked(Option<PathBuf>),
    ImageLoaded(Result<ImageDocument, String>),
    ClearImage,
    Viewport(CanvasInput),
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ToggleSidebar,
    CloseSidebar,
    ToggleTheme,
}

struct ImageViewer {
    view: ImageView<ImageDocument>,
    sidebar: Sidebar,
    status: Status,
    theme: ThemeChoice,
}

impl ImageViewer {
    fn new(config: Config) -> (Self, Task<Message>) {
        let mut viewer = Self {
            view: ImageView::default(),
            sidebar: Sidebar::default(),
            status: Status::default(),
            theme: config.theme,
        };

        let task = match config.image {
            Some(path) => viewer.load(path),
            None => Task::none(),
        };
        (viewer, task)
    }

    fn load(&mut self, path: PathBuf) -> Task<Message> {
        tracing::info!("Loading image {}", path.display());
        self.status.begin("Loading image…");
        Task::perform(ImageDocument::load(path), Message::ImageLoaded)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFile => {
                self.sidebar.close();
                if self.status.is_loading() {
                    return Task::none();
                }
                self.status.begin("Choosing image…");
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .add_filter("Images", &["png", "jpg", "jpeg"])
                            .pick_file()
                            .await
                            .map(|file| file.path().to_path_buf())
                    },
                    Message::FilePicked,
                );
            }
            Message::FilePicked(picked) => match picked {
                Some(path) => return self.load(path),
                None => self.status.settle(),
            },
            Message::ImageLoaded(result) => match result {
                Ok(document) => {
                    let name = document.file_name();
                    let (width, height) = document.dimensions();
                    tracing::info!(
                        "Opened {} ({}x{})",
                        document.path().display(),
                        width,
                        height
                    );
                    // The old handle is released here, after the swap, so the
                    // renderer never sees a dangling image.
                    if let Some(previous) = self.view.show(document) {
                        tracing::debug!("Released {}", previous.file_name());
                    }
                    self.status.succeed(format!("Opened {name}"));
                }
                Err(e) => {
                    tracing::error!("Failed to open image: {}", e);
                    self.status.fail(e);
                }
            },
            Message::ClearImage => {
                self.sidebar.close();
                if let Some(previous) = self.view.clear() {
                    tracing::debug!("Released {}", previous.file_name());
                }
                self.status.clear_info();
            }
            Message::Viewport(CanvasInput { container, event }) => {
                self.view.handle(ViewportEvent::ContainerResized(container));
                if let Some(event) = event {
                    self.view.handle(event);
                }
            }
            Message::ZoomIn => {
                self.view.handle(ViewportEvent::ZoomIn);
            }
            Message::ZoomOut => {
                self.view.handle(ViewportEvent::ZoomOut);
            }
            Message::ZoomReset => {
                self.view.handle(ViewportEvent::Reset);
            }
            Message::ToggleSidebar => self.sidebar.toggle(),
            Message::CloseSidebar => self.sidebar.close(),
            Message::ToggleTheme => self.theme = self.theme.toggled(),
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        if !self.sidebar.is_open() {
            return Subscription::none();
        }
        keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::CloseSidebar),
            _ => None,
        })
    }

    fn theme(&self) -> Theme {
        self.theme.theme()
    }

    fn view(&self) -> Element<Message> {
        let theme_label = match self.theme {
            ThemeChoice::Dark => "Light theme",
            ThemeChoice::Light => "Dark theme",
        };

        let header = row![
            button("☰").on_press(Message::ToggleSidebar),
            text("orthoview").size(24),
            horizontal_space(),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .padding(10)
        .align_y(iced::Alignment::Center);

        let content: Element<Message> = match (self.view.image(), self.view.viewport()) {
            (Some(document), Some(viewport)) => {
                let toolbar = row![
                    text(document.file_name()).size(14),
                    horizontal_space(),
                    button("−").on_press(Message::ZoomOut),
                    button("↺").on_press(Message::ZoomReset),
                    button("+").on_press(Message::ZoomIn),
                    text(viewport.zoom_label()),
                ]
                .spacing(10)
                .padding(10)
                .align_y(iced::Alignment::Center);

                let image_view = container(
                    canvas(ImageCanvas::new(document, viewport))
                        .width(Length::Fill)
                        .height(Length::Fill),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .clip(true);

                column![toolbar, image_view].into()
            }
            // Welcome screen
            _ => container(
                column![
                    text("No image loaded").size(24),
                    text("Open an image from the menu to get started").size(16),
                    button("Open image…")
                        .on_press_maybe((!self.status.is_loading()).then_some(Message::OpenFile))
                ]
                .spacing(20)
                .align_x(iced::Alignment::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        };

        let main_content = column![header, self.status.view(), content].spacing(10).padding(10);

        match self
            .sidebar
            .view(self.status.is_loading(), self.view.has_image())
        {
            Some(menu) => stack![main_content, menu].into(),
            None => main_content.into(),
        }
    }
}
