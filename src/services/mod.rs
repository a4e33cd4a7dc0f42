//! Collaborators at the edges of the engine: price source and notifier.

pub mod coingecko;
pub mod market_data;
pub mod notifier;

pub use coingecko::CoinGeckoProvider;
pub use market_data::{MarketDataError, MarketDataProvider};
pub use notifier::{AlertLevel, Notifier, NotifyError, TelegramNotifier};
