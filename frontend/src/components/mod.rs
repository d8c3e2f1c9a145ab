pub mod connection_status;
pub mod download_button;
pub mod farmer_details;
pub mod ledger_section;
pub mod summary_panel;

pub use connection_status::ConnectionStatus;
pub use download_button::DownloadButton;
pub use farmer_details::FarmerDetailsSection;
pub use ledger_section::{LedgerKind, LedgerSection};
pub use summary_panel::SummaryPanel;
