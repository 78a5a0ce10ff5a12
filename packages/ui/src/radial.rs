use dioxus::prelude::*;

pub const SPOKE_COUNT: usize = 12;

const CENTER: f64 = 100.0;
const INNER_RADIUS: f64 = 18.0;
const OUTER_RADIUS: f64 = 84.0;

/// Start and end points of each spoke, clockwise from three o'clock.
pub fn spokes() -> [((f64, f64), (f64, f64)); SPOKE_COUNT] {
    std::array::from_fn(|index| {
        let angle = std::f64::consts::TAU * index as f64 / SPOKE_COUNT as f64;
        let (sin, cos) = angle.sin_cos();
        (
            (CENTER + INNER_RADIUS * cos, CENTER + INNER_RADIUS * sin),
            (CENTER + OUTER_RADIUS * cos, CENTER + OUTER_RADIUS * sin),
        )
    })
}

/// Decorative twelve-spoke motif shown when a hero has no image.
#[component]
pub fn RadialMotif() -> Element {
    rsx! {
        svg {
            class: "hero_radial",
            "viewBox": "0 0 200 200",
            "aria-hidden": "true",
            "focusable": "false",
            circle { class: "hero_radial_ring", cx: "100", cy: "100", r: "{OUTER_RADIUS}" }
            for (index, ((x1, y1), (x2, y2))) in spokes().into_iter().enumerate() {
                line {
                    key: "{index}",
                    class: "hero_radial_spoke",
                    x1: "{x1:.2}",
                    y1: "{y1:.2}",
                    x2: "{x2:.2}",
                    y2: "{y2:.2}",
                }
            }
            circle { class: "hero_radial_core", cx: "100", cy: "100", r: "{INNER_RADIUS}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn twelve_evenly_spaced_spokes() {
        let spokes = spokes();
        assert_eq!(spokes.len(), 12);

        let ((_, _), (x, y)) = spokes[0];
        assert!(close(x, CENTER + OUTER_RADIUS) && close(y, CENTER));

        let ((_, _), (x, y)) = spokes[3];
        assert!(close(x, CENTER) && close(y, CENTER + OUTER_RADIUS));

        let ((_, _), (x, y)) = spokes[6];
        assert!(close(x, CENTER - OUTER_RADIUS) && close(y, CENTER));
    }

    #[test]
    fn spokes_stay_inside_the_view_box() {
        for ((x1, y1), (x2, y2)) in spokes() {
            for v in [x1, y1, x2, y2] {
                assert!((0.0..=200.0).contains(&v));
            }
        }
    }

    #[test]
    fn geometry_is_deterministic() {
        assert_eq!(spokes(), spokes());
    }
}
