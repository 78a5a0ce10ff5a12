use dioxus::prelude::*;

/// Timing for the hero entrance: fade in while sliding up by `offset_px`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceMotion {
    pub duration_ms: u32,
    pub offset_px: u32,
    pub stagger_ms: u32,
}

impl Default for EntranceMotion {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            offset_px: 24,
            stagger_ms: 120,
        }
    }
}

/// Script animating every `[data-motion]` child of `root_id`, in document order.
///
/// Does nothing under `prefers-reduced-motion` or without the Web Animations API.
pub fn entrance_script(root_id: &str, motion: &EntranceMotion) -> String {
    let root_id = serde_json::to_string(root_id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"(function(){{
  try {{
    const root = document.getElementById({root_id});
    if(!root) return "";
    if(window.matchMedia && window.matchMedia("(prefers-reduced-motion: reduce)").matches) return "";
    root.querySelectorAll("[data-motion]").forEach(function(el, i){{
      if(typeof el.animate !== "function") return;
      el.animate(
        [{{ opacity: 0, transform: "translateY({offset}px)" }}, {{ opacity: 1, transform: "none" }}],
        {{ duration: {duration}, delay: i * {stagger}, easing: "ease-out", fill: "backwards" }}
      );
    }});
  }} catch(e) {{}}
  return "";
}})()"#,
        offset = motion.offset_px,
        duration = motion.duration_ms,
        stagger = motion.stagger_ms,
    )
}

/// Run the entrance transition once after mount. Failures are ignored.
pub fn use_entrance_motion(root_id: String, enabled: bool) {
    use_effect(move || {
        if !enabled {
            return;
        }
        let script = entrance_script(&root_id, &EntranceMotion::default());
        spawn(async move {
            let _ = document::eval(&script).await;
        });
    });
}
