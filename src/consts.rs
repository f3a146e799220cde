/// Shape emitted by HTML `<input type="datetime-local">` clients.
pub const DATETIME_LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const DATETIME_LOCAL_WITH_SECONDS_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub const TIME_INPUT_FORMAT: &str = "%H:%M";
pub const TIME_WITH_SECONDS_INPUT_FORMAT: &str = "%H:%M:%S";
