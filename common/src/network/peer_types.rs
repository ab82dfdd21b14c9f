/// Which role sits on the other end of a communicator. Recorded at
/// connection setup; the transport treats every peer the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerType {
    /// A customer browsing and ordering.
    CustomerType,
    /// The admin panel.
    AdminType,
    /// The canteen server itself.
    ServerType,
}
