//! Page modules

pub mod home;
pub mod login;
pub mod market;
pub mod profile;
pub mod trade;
pub mod withdraw;

pub use home::HomePage;
pub use login::LoginPage;
pub use market::MarketPage;
pub use profile::ProfilePage;
pub use trade::TradePage;
pub use withdraw::WithdrawPage;
