pub const DEFAULT_AUTHOR: &str = "anonymous";
pub const DEFAULT_ENABLED: bool = false;
