pub const SERVER_IP_ADDRESS: &str = "127.0.0.1";
pub const SERVER_PORT: u16 = 8080;

// Credenciales fijas del panel de administración (es una demo, no hay auth real).
pub const ADMIN_ID: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

/// How often a customer asks for the status of their order.
pub const STATUS_POLL_MILLIS: u64 = 2000;
/// How often the admin sweeps the order board to advance statuses.
pub const ADMIN_SWEEP_MILLIS: u64 = 3000;
/// Cosmetic pause between cart picks in the customer demo. No data effect.
pub const ADDED_NOTICE_MILLIS: u64 = 1000;
