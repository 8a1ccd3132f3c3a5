//! MUI theme module export.

use tonal_color::to_hex;
use tonal_model::{Palette, ThemeMode};

/// A ready-to-import `theme.ts` for MUI, mapping the six roles onto the
/// closest MUI palette slots.
pub fn mui_theme(palette: &Palette, mode: ThemeMode) -> String {
    format!(
        "import {{ createTheme }} from \"@mui/material/styles\";\n\
         \n\
         export const theme = createTheme({{\n\
         \x20 palette: {{\n\
         \x20   mode: \"{mode}\",\n\
         \x20   primary: {{ main: \"{primary}\" }},\n\
         \x20   secondary: {{ main: \"{accent}\" }},\n\
         \x20   background: {{\n\
         \x20     default: \"{background}\",\n\
         \x20     paper: \"{surface}\",\n\
         \x20   }},\n\
         \x20   text: {{\n\
         \x20     primary: \"{text}\",\n\
         \x20     secondary: \"{muted}\",\n\
         \x20   }},\n\
         \x20 }},\n\
         }});\n",
        mode = mode,
        primary = to_hex(palette.primary),
        accent = to_hex(palette.accent),
        background = to_hex(palette.background),
        surface = to_hex(palette.surface),
        text = to_hex(palette.text),
        muted = to_hex(palette.muted),
    )
}
