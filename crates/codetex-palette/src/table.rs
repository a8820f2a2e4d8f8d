//! Built-in named color table.

use crate::rgb::Rgb;

/// Named colors ordered by hex code. Display names may contain spaces;
/// [`color_name`](crate::color_name) strips them.
pub static PALETTE: &[(Rgb, &str)] = &[
    (Rgb::new(0x00, 0x00, 0x00), "Black"),
    (Rgb::new(0x00, 0x00, 0x80), "Navy"),
    (Rgb::new(0x00, 0x00, 0x8B), "Dark Blue"),
    (Rgb::new(0x00, 0x00, 0xCD), "Medium Blue"),
    (Rgb::new(0x00, 0x00, 0xFF), "Blue"),
    (Rgb::new(0x00, 0x64, 0x00), "Dark Green"),
    (Rgb::new(0x00, 0x80, 0x00), "Green"),
    (Rgb::new(0x00, 0x80, 0x80), "Teal"),
    (Rgb::new(0x00, 0x8B, 0x8B), "Dark Cyan"),
    (Rgb::new(0x00, 0xBF, 0xFF), "Deep Sky Blue"),
    (Rgb::new(0x00, 0xCE, 0xD1), "Dark Turquoise"),
    (Rgb::new(0x00, 0xFA, 0x9A), "Medium Spring Green"),
    (Rgb::new(0x00, 0xFF, 0x00), "Lime"),
    (Rgb::new(0x00, 0xFF, 0x7F), "Spring Green"),
    (Rgb::new(0x00, 0xFF, 0xFF), "Cyan"),
    (Rgb::new(0x19, 0x19, 0x70), "Midnight Blue"),
    (Rgb::new(0x1E, 0x90, 0xFF), "Dodger Blue"),
    (Rgb::new(0x20, 0xB2, 0xAA), "Light Sea Green"),
    (Rgb::new(0x22, 0x8B, 0x22), "Forest Green"),
    (Rgb::new(0x2E, 0x8B, 0x57), "Sea Green"),
    (Rgb::new(0x2F, 0x4F, 0x4F), "Dark Slate Gray"),
    (Rgb::new(0x32, 0xCD, 0x32), "Lime Green"),
    (Rgb::new(0x3C, 0xB3, 0x71), "Medium Sea Green"),
    (Rgb::new(0x40, 0xE0, 0xD0), "Turquoise"),
    (Rgb::new(0x41, 0x69, 0xE1), "Royal Blue"),
    (Rgb::new(0x46, 0x82, 0xB4), "Steel Blue"),
    (Rgb::new(0x48, 0x3D, 0x8B), "Dark Slate Blue"),
    (Rgb::new(0x48, 0xD1, 0xCC), "Medium Turquoise"),
    (Rgb::new(0x4B, 0x00, 0x82), "Indigo"),
    (Rgb::new(0x55, 0x6B, 0x2F), "Dark Olive Green"),
    (Rgb::new(0x5F, 0x9E, 0xA0), "Cadet Blue"),
    (Rgb::new(0x64, 0x95, 0xED), "Cornflower Blue"),
    (Rgb::new(0x66, 0x33, 0x99), "Rebecca Purple"),
    (Rgb::new(0x66, 0xCD, 0xAA), "Medium Aquamarine"),
    (Rgb::new(0x69, 0x69, 0x69), "Dim Gray"),
    (Rgb::new(0x6A, 0x5A, 0xCD), "Slate Blue"),
    (Rgb::new(0x6B, 0x8E, 0x23), "Olive Drab"),
    (Rgb::new(0x70, 0x80, 0x90), "Slate Gray"),
    (Rgb::new(0x77, 0x88, 0x99), "Light Slate Gray"),
    (Rgb::new(0x7B, 0x68, 0xEE), "Medium Slate Blue"),
    (Rgb::new(0x7C, 0xFC, 0x00), "Lawn Green"),
    (Rgb::new(0x7F, 0xFF, 0x00), "Chartreuse"),
    (Rgb::new(0x7F, 0xFF, 0xD4), "Aquamarine"),
    (Rgb::new(0x80, 0x00, 0x00), "Maroon"),
    (Rgb::new(0x80, 0x00, 0x80), "Purple"),
    (Rgb::new(0x80, 0x80, 0x00), "Olive"),
    (Rgb::new(0x80, 0x80, 0x80), "Gray"),
    (Rgb::new(0x87, 0xCE, 0xEB), "Sky Blue"),
    (Rgb::new(0x87, 0xCE, 0xFA), "Light Sky Blue"),
    (Rgb::new(0x8A, 0x2B, 0xE2), "Blue Violet"),
    (Rgb::new(0x8B, 0x00, 0x00), "Dark Red"),
    (Rgb::new(0x8B, 0x00, 0x8B), "Dark Magenta"),
    (Rgb::new(0x8B, 0x45, 0x13), "Saddle Brown"),
    (Rgb::new(0x8F, 0xBC, 0x8F), "Dark Sea Green"),
    (Rgb::new(0x90, 0xEE, 0x90), "Light Green"),
    (Rgb::new(0x93, 0x70, 0xDB), "Medium Purple"),
    (Rgb::new(0x94, 0x00, 0xD3), "Dark Violet"),
    (Rgb::new(0x98, 0xFB, 0x98), "Pale Green"),
    (Rgb::new(0x99, 0x32, 0xCC), "Dark Orchid"),
    (Rgb::new(0x9A, 0xCD, 0x32), "Yellow Green"),
    (Rgb::new(0xA0, 0x52, 0x2D), "Sienna"),
    (Rgb::new(0xA5, 0x2A, 0x2A), "Brown"),
    (Rgb::new(0xA9, 0xA9, 0xA9), "Dark Gray"),
    (Rgb::new(0xAD, 0xD8, 0xE6), "Light Blue"),
    (Rgb::new(0xAD, 0xFF, 0x2F), "Green Yellow"),
    (Rgb::new(0xAF, 0xEE, 0xEE), "Pale Turquoise"),
    (Rgb::new(0xB0, 0xC4, 0xDE), "Light Steel Blue"),
    (Rgb::new(0xB0, 0xE0, 0xE6), "Powder Blue"),
    (Rgb::new(0xB2, 0x22, 0x22), "Fire Brick"),
    (Rgb::new(0xB8, 0x86, 0x0B), "Dark Goldenrod"),
    (Rgb::new(0xBA, 0x55, 0xD3), "Medium Orchid"),
    (Rgb::new(0xBC, 0x8F, 0x8F), "Rosy Brown"),
    (Rgb::new(0xBD, 0xB7, 0x6B), "Dark Khaki"),
    (Rgb::new(0xC0, 0xC0, 0xC0), "Silver"),
    (Rgb::new(0xC7, 0x15, 0x85), "Medium Violet Red"),
    (Rgb::new(0xCD, 0x5C, 0x5C), "Indian Red"),
    (Rgb::new(0xCD, 0x85, 0x3F), "Peru"),
    (Rgb::new(0xD2, 0x69, 0x1E), "Chocolate"),
    (Rgb::new(0xD2, 0xB4, 0x8C), "Tan"),
    (Rgb::new(0xD3, 0xD3, 0xD3), "Light Gray"),
    (Rgb::new(0xD8, 0xBF, 0xD8), "Thistle"),
    (Rgb::new(0xDA, 0x70, 0xD6), "Orchid"),
    (Rgb::new(0xDA, 0xA5, 0x20), "Goldenrod"),
    (Rgb::new(0xDB, 0x70, 0x93), "Pale Violet Red"),
    (Rgb::new(0xDC, 0x14, 0x3C), "Crimson"),
    (Rgb::new(0xDC, 0xDC, 0xDC), "Gainsboro"),
    (Rgb::new(0xDD, 0xA0, 0xDD), "Plum"),
    (Rgb::new(0xDE, 0xB8, 0x87), "Burly Wood"),
    (Rgb::new(0xE0, 0xFF, 0xFF), "Light Cyan"),
    (Rgb::new(0xE6, 0xE6, 0xFA), "Lavender"),
    (Rgb::new(0xE9, 0x96, 0x7A), "Dark Salmon"),
    (Rgb::new(0xEE, 0x82, 0xEE), "Violet"),
    (Rgb::new(0xEE, 0xE8, 0xAA), "Pale Goldenrod"),
    (Rgb::new(0xF0, 0x80, 0x80), "Light Coral"),
    (Rgb::new(0xF0, 0xE6, 0x8C), "Khaki"),
    (Rgb::new(0xF0, 0xF8, 0xFF), "Alice Blue"),
    (Rgb::new(0xF0, 0xFF, 0xF0), "Honeydew"),
    (Rgb::new(0xF0, 0xFF, 0xFF), "Azure"),
    (Rgb::new(0xF4, 0xA4, 0x60), "Sandy Brown"),
    (Rgb::new(0xF5, 0xDE, 0xB3), "Wheat"),
    (Rgb::new(0xF5, 0xF5, 0xDC), "Beige"),
    (Rgb::new(0xF5, 0xF5, 0xF5), "White Smoke"),
    (Rgb::new(0xF5, 0xFF, 0xFA), "Mint Cream"),
    (Rgb::new(0xF8, 0xF8, 0xFF), "Ghost White"),
    (Rgb::new(0xFA, 0x80, 0x72), "Salmon"),
    (Rgb::new(0xFA, 0xEB, 0xD7), "Antique White"),
    (Rgb::new(0xFA, 0xF0, 0xE6), "Linen"),
    (Rgb::new(0xFA, 0xFA, 0xD2), "Light Goldenrod Yellow"),
    (Rgb::new(0xFD, 0xF5, 0xE6), "Old Lace"),
    (Rgb::new(0xFF, 0x00, 0x00), "Red"),
    (Rgb::new(0xFF, 0x00, 0xFF), "Magenta"),
    (Rgb::new(0xFF, 0x14, 0x93), "Deep Pink"),
    (Rgb::new(0xFF, 0x45, 0x00), "Orange Red"),
    (Rgb::new(0xFF, 0x63, 0x47), "Tomato"),
    (Rgb::new(0xFF, 0x69, 0xB4), "Hot Pink"),
    (Rgb::new(0xFF, 0x7F, 0x50), "Coral"),
    (Rgb::new(0xFF, 0x8C, 0x00), "Dark Orange"),
    (Rgb::new(0xFF, 0xA0, 0x7A), "Light Salmon"),
    (Rgb::new(0xFF, 0xA5, 0x00), "Orange"),
    (Rgb::new(0xFF, 0xB6, 0xC1), "Light Pink"),
    (Rgb::new(0xFF, 0xC0, 0xCB), "Pink"),
    (Rgb::new(0xFF, 0xD7, 0x00), "Gold"),
    (Rgb::new(0xFF, 0xDA, 0xB9), "Peach Puff"),
    (Rgb::new(0xFF, 0xDE, 0xAD), "Navajo White"),
    (Rgb::new(0xFF, 0xE4, 0xB5), "Moccasin"),
    (Rgb::new(0xFF, 0xE4, 0xC4), "Bisque"),
    (Rgb::new(0xFF, 0xE4, 0xE1), "Misty Rose"),
    (Rgb::new(0xFF, 0xEB, 0xCD), "Blanched Almond"),
    (Rgb::new(0xFF, 0xEF, 0xD5), "Papaya Whip"),
    (Rgb::new(0xFF, 0xF0, 0xF5), "Lavender Blush"),
    (Rgb::new(0xFF, 0xF5, 0xEE), "Seashell"),
    (Rgb::new(0xFF, 0xF8, 0xDC), "Cornsilk"),
    (Rgb::new(0xFF, 0xFA, 0xCD), "Lemon Chiffon"),
    (Rgb::new(0xFF, 0xFA, 0xF0), "Floral White"),
    (Rgb::new(0xFF, 0xFA, 0xFA), "Snow"),
    (Rgb::new(0xFF, 0xFF, 0x00), "Yellow"),
    (Rgb::new(0xFF, 0xFF, 0xE0), "Light Yellow"),
    (Rgb::new(0xFF, 0xFF, 0xF0), "Ivory"),
    (Rgb::new(0xFF, 0xFF, 0xFF), "White"),
];
