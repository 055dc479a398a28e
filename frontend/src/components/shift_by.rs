//! Nudge children by a pixel offset without disturbing layout.
//!
//! ```ignore
//! <ShiftBy x={-3}>
//!     <h2>{ "Slightly misaligned heading" }</h2>
//! </ShiftBy>
//! ```

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShiftByProps {
    #[prop_or_default]
    pub x: i32,
    #[prop_or_default]
    pub y: i32,
    #[prop_or_default]
    pub children: Children,
}

fn translate_style(x: i32, y: i32) -> String {
    format!("transform: translate({x}px, {y}px);")
}

#[function_component(ShiftBy)]
pub fn shift_by(props: &ShiftByProps) -> Html {
    html! {
        <div style={translate_style(props.x, props.y)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_contains_the_offsets() {
        assert_eq!(
            translate_style(-3, 12),
            "transform: translate(-3px, 12px);"
        );
    }

    #[test]
    fn zero_offset_still_emits_a_transform() {
        assert_eq!(translate_style(0, 0), "transform: translate(0px, 0px);");
    }
}
