pub struct Icons;

impl Icons {
    pub const HOME: &str = "🏠";
    pub const CHECK: &str = "✅";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const DATABASE: &str = "🗄️";
    pub const PICTURE: &str = "🖼️";
    pub const SOUND: &str = "🔊";
    pub const GRID: &str = "🔲";
    pub const PALETTE: &str = "🎨";
    pub const SEPARATOR: &str = "›";
    pub const ELLIPSIS: &str = "…";
}
