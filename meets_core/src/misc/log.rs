/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library. No log implementation
is provided; for more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [the saturation engine](crate::procedures::saturate).
    pub const SATURATE: &str = "saturate";

    /// Logs related to [the extend step](crate::procedures::extend).
    pub const EXTEND: &str = "extend";

    /// Logs related to [the search driver](crate::procedures::search).
    pub const SEARCH: &str = "search";

    /// Logs related to [preprocessing](crate::preprocessing).
    pub const PREPROCESS: &str = "preprocess";
}
