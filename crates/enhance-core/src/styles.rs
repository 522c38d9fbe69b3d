use crate::constants::*;

// Theme custom properties, each with the fallback used when the site does not
// define it.
pub const ACCENT: &str = "var(--main-color, rgb(199,0,11))";
pub const ACCENT_HOVER_BORDER: &str = "var(--sub-color, rgb(211,57,65))";
pub const PANEL_BG: &str = "var(--card-bg, #161b22)";
pub const BASE_DARK: &str = "var(--tech-black, #0d1117)";

pub const SIDEBAR_STYLE_ID: &str = "sidebar-toggle-style";

/// Rules for the proxy buttons and fixed drawers, injected once into `<head>`.
pub fn sidebar_stylesheet() -> String {
    format!(
        r#"
.sidebar-toggle-left,
.sidebar-toggle-right {{
    position: fixed !important;
    top: 20px !important;
    z-index: 1002 !important;
    display: flex !important;
    align-items: center !important;
    justify-content: center !important;
    background: {base} !important;
    border: 2px solid {accent} !important;
    border-radius: 50% !important;
    width: {btn}px !important;
    height: {btn}px !important;
    cursor: pointer !important;
    color: #fff !important;
    font-size: 18px !important;
    font-weight: bold !important;
    transition: all 0.3s ease !important;
    box-shadow: 0 2px 10px rgba(199,0,11, 0.4) !important;
    opacity: 1 !important;
    visibility: visible !important;
}}
.sidebar-toggle-left {{ left: 15px !important; }}
.sidebar-toggle-right {{ right: 15px !important; }}
.sidebar-toggle-left:hover,
.sidebar-toggle-right:hover {{
    background: {accent} !important;
    box-shadow: 0 4px 15px rgba(199,0,11, 0.6) !important;
    transform: scale(1.05) !important;
    border-color: {hover_border} !important;
}}
.nav-overlay-icon,
.toc-overlay-icon {{
    display: none !important;
}}
.sidebar-drawer,
.toc-drawer {{
    transition: transform 0.3s ease, opacity 0.3s ease !important;
    position: fixed !important;
    top: 0 !important;
    height: 100vh !important;
    overflow-y: auto !important;
    z-index: 1000 !important;
}}
.sidebar-drawer {{
    left: 0 !important;
    width: {drawer}px !important;
    background: {panel} !important;
    border-right: 3px solid {accent} !important;
}}
.toc-drawer {{
    right: 0 !important;
    width: {drawer}px !important;
    background: {panel} !important;
    border-left: 3px solid {accent} !important;
}}
@media (max-width: {tablet}px) {{
    .sidebar-toggle-left,
    .sidebar-toggle-right {{
        width: {btn_tablet}px !important;
        height: {btn_tablet}px !important;
        font-size: 16px !important;
        top: 15px !important;
    }}
    .sidebar-toggle-left {{ left: 10px !important; }}
    .sidebar-toggle-right {{ right: 10px !important; }}
    .sidebar-drawer,
    .toc-drawer {{
        width: 100% !important;
        max-width: {drawer}px !important;
    }}
}}
@media (max-width: {phone}px) {{
    .sidebar-toggle-left,
    .sidebar-toggle-right {{
        width: {btn_phone}px !important;
        height: {btn_phone}px !important;
        font-size: 14px !important;
    }}
}}
"#,
        base = BASE_DARK,
        accent = ACCENT,
        hover_border = ACCENT_HOVER_BORDER,
        panel = PANEL_BG,
        btn = TOGGLE_BUTTON_PX,
        btn_tablet = TOGGLE_BUTTON_TABLET_PX,
        btn_phone = TOGGLE_BUTTON_PHONE_PX,
        drawer = DRAWER_WIDTH_PX,
        tablet = BREAKPOINT_TABLET_PX,
        phone = BREAKPOINT_PHONE_PX,
    )
}
