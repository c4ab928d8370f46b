#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub theme: Theme,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The four top-level screens of the authenticated shell. Navigation is
/// plain state (there is no URL routing) and logout resets it to the
/// default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Destination {
    #[default]
    Dashboard,
    Profile,
    Upload,
    Browse,
}

impl Destination {
    pub const ALL: [Destination; 4] = [
        Destination::Dashboard,
        Destination::Profile,
        Destination::Upload,
        Destination::Browse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Destination::Dashboard => "Dashboard",
            Destination::Profile => "My Profile",
            Destination::Upload => "Upload Assignments",
            Destination::Browse => "Home Assignments",
        }
    }
}
