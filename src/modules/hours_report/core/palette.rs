// Fixed colour palette for chart slices and legend boxes, assigned by rank.

pub const COLOR_PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9",
];

pub fn color_for_rank(rank: usize) -> &'static str {
    COLOR_PALETTE[rank % COLOR_PALETTE.len()]
}
