//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// ISX deep links rendered into contact attributes
pub const CUSTOMER_LINK_PREFIX: &str = "https://isx.nusa.net.id/customer.php?custId=";
pub const CUSTOMER_LINK_SUFFIX: &str = "&pid=profile&module=customer";
pub const SUBSCRIPTION_LINK_PREFIX: &str = "https://isx.nusa.net.id/v2/customer/service/";
pub const SUBSCRIPTION_LINK_SUFFIX: &str = "/detail";

/// Branch whose contacts live in central Indonesian time.
pub const MAKASSAR_BRANCH_CODE: &str = "062";

// Attribute list separators
pub const LIST_SEPARATOR: &str = ", ";
pub const CUSTOMER_ID_DELIMITER: char = ',';

// Subscriptions in this status are excluded from the contact
pub const CANCELED_SUBSCRIPTION_STATUS: &str = "NA";

// Server defaults
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3000;

// Datastore defaults
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_NAME: &str = "isx";
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
pub const DEFAULT_DB_ACQUIRE_TIMEOUT_MS: u64 = 30_000;

// NusaContact delivery defaults
pub const DEFAULT_NUSACONTACT_API_URL: &str = "https://nusacontact.net.id/api/contacts";
pub const DEFAULT_SYNC_MAX_ATTEMPTS: u32 = 16;
pub const DEFAULT_SYNC_BASE_DELAY_MS: u64 = 1000;
pub const DEFAULT_SYNC_JITTER_MS: u64 = 300;
pub const DEFAULT_SYNC_TIMEOUT_MS: u64 = 10_000;
pub const RETRYABLE_CLIENT_STATUSES: [u16; 2] = [408, 429];
pub const API_KEY_HEADER: &str = "X-Api-Key";
