//! BarberDesk Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use tracing::{info, warn, error};

use BarberDesk::{
    config::Settings,
    utils::logging,
    database::{BookingRepository, BookingStore},
    services::ServiceFactory,
    i18n::I18n,
    handlers::{
        commands::{handle_command, Command},
        callbacks::handle_callback_query,
    },
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", BarberDesk::info());

    // Initialize booking store
    let repository = match &settings.store.seed_path {
        Some(path) => {
            info!(path = %path, "Seeding bookings from file...");
            BookingRepository::from_seed_file(path).await?
        }
        None => {
            warn!("No seed file configured, starting with an empty booking list");
            BookingRepository::new()
        }
    };
    info!(bookings = repository.len().await, "Booking store ready");
    let store: Arc<dyn BookingStore> = Arc::new(repository);

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::new(&settings.i18n);
    i18n.load_translations().await?;

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    info!("Initializing services...");
    let services = ServiceFactory::new(settings, store);

    let services_arc = Arc::new(services);
    let i18n_arc = Arc::new(i18n);

    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services_arc, i18n_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("BarberDesk bot is ready, starting polling...");

    dispatcher.dispatch().await;

    info!("BarberDesk bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_commands),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callbacks))
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, &services, &i18n).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: CallbackQuery,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    let user_id = query.from.id.0 as i64;

    if let Err(e) = handle_callback_query(bot, query, &services, &i18n).await {
        error!(user_id = user_id, error = %e, "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}
