#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerState {
    Configuring,
    Active,
    Closed,
}
