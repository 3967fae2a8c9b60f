use iced::widget::{button, canvas, column, container, row, scrollable, text, text_input, vertical_rule};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use iced_aw::Wrap;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod net;
mod state;
mod ui;

use config::Config;
use error::FetchError;
use state::catalog::FetchState;
use state::categories::{self, CategoryFilter};
use state::data::Product;
use state::filter::{self, SearchText};
use state::price::{PriceSlider, Thumb};

/// Main application state
struct CatalogBrowser {
    config: Config,
    /// Shared HTTP client for the catalog and image requests
    client: reqwest::Client,
    fetch: FetchState,
    categories: Vec<CategoryFilter>,
    /// Search field contents as typed
    search_input: String,
    search: SearchText,
    slider: PriceSlider,
    /// Downsized product images keyed by product id
    thumbnails: HashMap<u64, iced::widget::image::Handle>,
    /// Bumped on every successful load so late thumbnails from an earlier
    /// load are ignored
    generation: u64,
    spinner_rotation: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Catalog request finished
    CatalogLoaded(Result<Arc<Vec<Product>>, FetchError>),
    /// User asked to reload after a failure
    Retry,
    /// A product image finished downloading
    ThumbnailLoaded {
        generation: u64,
        id: u64,
        result: Result<iced::widget::image::Handle, FetchError>,
    },
    SearchChanged(String),
    PriceDragged(Thumb, f64),
    CategoryToggled(String, bool),
    /// Spinner animation frame
    Tick,
}

impl CatalogBrowser {
    /// Create a new instance of the application and start loading the catalog
    fn new() -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_else(|err| {
            error!(%err, "falling back to default configuration");
            Config::default()
        });
        info!(endpoint = %config.endpoint, "catalog browser starting");

        let app = CatalogBrowser {
            client: net::client(config.request_timeout()),
            slider: PriceSlider::new(config.slider_bounds()),
            config,
            fetch: FetchState::Pending,
            categories: Vec::new(),
            search_input: String::new(),
            search: SearchText::default(),
            thumbnails: HashMap::new(),
            generation: 0,
            spinner_rotation: 0.0,
        };
        let task = app.load_catalog();
        (app, task)
    }

    fn load_catalog(&self) -> Task<Message> {
        Task::perform(
            net::catalog::fetch_products(self.client.clone(), self.config.endpoint.clone()),
            Message::CatalogLoaded,
        )
    }

    /// One download task per product, tagged with the current generation
    fn load_thumbnails(&self, products: &[Product]) -> Task<Message> {
        let generation = self.generation;
        Task::batch(products.iter().map(|product| {
            let id = product.id;
            Task::perform(
                net::thumbnail::fetch_thumbnail(
                    self.client.clone(),
                    product.image.clone(),
                    self.config.thumbnail_size,
                ),
                move |result| Message::ThumbnailLoaded { generation, id, result },
            )
        }))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(products)) => {
                // Selection state starts over with every load
                self.categories = categories::extract_categories(&products);
                self.generation += 1;
                self.thumbnails.clear();
                info!(
                    products = products.len(),
                    categories = self.categories.len(),
                    "catalog ready"
                );

                let task = self.load_thumbnails(&products);
                self.fetch = FetchState::Loaded(products);
                task
            }
            Message::CatalogLoaded(Err(err)) => {
                error!(%err, "catalog request failed");
                self.fetch = FetchState::Failed(err);
                Task::none()
            }
            Message::Retry => {
                info!("retrying catalog request");
                self.fetch = FetchState::Pending;
                self.load_catalog()
            }
            Message::ThumbnailLoaded { generation, id, result } => {
                if generation != self.generation {
                    return Task::none();
                }
                match result {
                    Ok(handle) => {
                        self.thumbnails.insert(id, handle);
                    }
                    Err(err) => warn!(product = id, %err, "thumbnail unavailable"),
                }
                Task::none()
            }
            Message::SearchChanged(value) => {
                self.search = SearchText::new(&value);
                self.search_input = value;
                Task::none()
            }
            Message::PriceDragged(thumb, value) => {
                self.slider.drag(thumb, value);
                Task::none()
            }
            Message::CategoryToggled(title, selected) => {
                self.categories = categories::toggle_category(&self.categories, &title, selected);
                debug!(
                    %title,
                    selected,
                    filtering = categories::any_selected(&self.categories),
                    "category toggled"
                );
                Task::none()
            }
            Message::Tick => {
                self.spinner_rotation = ui::spinner::advance(self.spinner_rotation);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.fetch {
            FetchState::Pending => self.view_loading(),
            FetchState::Failed(err) => self.view_failed(err),
            FetchState::Loaded(products) => self.view_catalog(products),
        }
    }

    fn view_loading(&self) -> Element<Message> {
        let spinner = canvas(ui::spinner::Spinner {
            rotation: self.spinner_rotation,
        })
        .width(Length::Fixed(48.0))
        .height(Length::Fixed(48.0));

        container(spinner)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn view_failed<'a>(&'a self, err: &'a FetchError) -> Element<'a, Message> {
        let content = column![
            text("Could not load the catalog").size(24),
            text(err.to_string()).size(14),
            button("Retry").on_press(Message::Retry).padding(10),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn view_catalog<'a>(&'a self, products: &'a [Product]) -> Element<'a, Message> {
        let visible = filter::visible_products(
            products,
            &self.search,
            self.slider.range(),
            &self.categories,
        );

        let search = text_input("Search", &self.search_input)
            .on_input(Message::SearchChanged)
            .padding(12)
            .size(16);

        let cards: Vec<Element<Message>> = visible
            .into_iter()
            .map(|product| {
                ui::card::product_card(
                    product,
                    self.search.as_str(),
                    self.thumbnails.get(&product.id),
                )
            })
            .collect();

        let grid: Element<Message> = if cards.is_empty() {
            container(text("No products match the current filters").size(16))
                .center_x(Length::Fill)
                .padding(40)
                .into()
        } else {
            Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0).into()
        };

        let main = column![search, scrollable(grid).height(Length::Fill)]
            .spacing(24)
            .padding(32)
            .width(Length::Fill);

        row![
            ui::sidebar::filter_panel(&self.slider, &self.categories),
            vertical_rule(1),
            main,
        ]
        .height(Length::Fill)
        .into()
    }

    /// Drive the spinner only while waiting on the catalog
    fn subscription(&self) -> Subscription<Message> {
        if self.fetch.is_pending() {
            iced::time::every(Duration::from_millis(16)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("catalog_browser=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application(
        "Catalog Browser",
        CatalogBrowser::update,
        CatalogBrowser::view,
    )
    .subscription(CatalogBrowser::subscription)
    .theme(CatalogBrowser::theme)
    .centered()
    .run_with(CatalogBrowser::new)
}
