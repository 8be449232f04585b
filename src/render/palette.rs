pub const ROUTE_COLORS: [&str; 8] = [
    "#3388ff", "#22aa44", "#dd4422", "#8844dd", "#dd8800", "#00aaaa", "#aa0088", "#668800",
];

pub const TRACK_COLORS: [&str; 8] = [
    "#e74c3c", "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3", "#00bcd4", "#009688",
];

pub fn route_color(index: usize) -> &'static str {
    ROUTE_COLORS[index % ROUTE_COLORS.len()]
}

pub fn track_color(index: usize) -> &'static str {
    TRACK_COLORS[index % TRACK_COLORS.len()]
}
