use crate::view::StyledElement;

/// Frosted-glass look forced onto the page header
pub const HEADER_STYLES: [(&str, &str); 6] = [
    ("backdrop-filter", "blur(12px) saturate(180%)"),
    ("-webkit-backdrop-filter", "blur(12px) saturate(180%)"),
    ("background-color", "rgba(255, 255, 255, 0.72)"),
    ("border-bottom", "1px solid rgba(255, 255, 255, 0.3)"),
    ("box-shadow", "0 4px 30px rgba(0, 0, 0, 0.1)"),
    ("position", "sticky"),
];

/// Writes the frosted header properties inline so stylesheet order can't undo them.
pub fn persist_header_style(header: &dyn StyledElement) {
    for (property, value) in HEADER_STYLES {
        header.set_style(property, value);
    }
}
