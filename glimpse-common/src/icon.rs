use tracing::warn;

/// The closed set of glyphs the gallery renders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IconName {
    Camera,
    Grid,
    #[default]
    Image,
    X,
    ChevronLeft,
    ChevronRight,
}

impl IconName {
    pub const ALL: [IconName; 6] = [
        IconName::Camera,
        IconName::Grid,
        IconName::Image,
        IconName::X,
        IconName::ChevronLeft,
        IconName::ChevronRight,
    ];

    /// String key used in markup and configuration
    pub fn key(self) -> &'static str {
        match self {
            IconName::Camera => "camera",
            IconName::Grid => "grid",
            IconName::Image => "image",
            IconName::X => "x",
            IconName::ChevronLeft => "chevron-left",
            IconName::ChevronRight => "chevron-right",
        }
    }

    /// Look up an icon by key. Unknown keys fall back to `Image`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "camera" => IconName::Camera,
            "grid" => IconName::Grid,
            "image" => IconName::Image,
            "x" => IconName::X,
            "chevron-left" => IconName::ChevronLeft,
            "chevron-right" => IconName::ChevronRight,
            other => {
                warn!("Unknown icon key {:?}, using image", other);
                IconName::Image
            }
        }
    }
}
