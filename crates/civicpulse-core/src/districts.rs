//! Static constituency reference list.

/// Tamil Nadu constituencies tracked by the dashboard.
///
/// Order is the display order; rollups key off case-insensitive mentions of
/// these names in post text.
pub const CONSTITUENCIES: &[&str] = &[
    "Chennai",
    "Coimbatore",
    "Madurai",
    "Tiruchirappalli",
    "Salem",
    "Tirunelveli",
    "Erode",
    "Vellore",
    "Thoothukudi",
    "Thanjavur",
    "Dindigul",
    "Kanyakumari",
];
