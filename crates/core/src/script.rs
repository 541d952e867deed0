//! Embedded navigation script.
//!
//! The script is the browser port of [`crate::navigation`]: the same state,
//! the same transitions, the same effect list. Thresholds and key bindings
//! are interpolated from [`NavigationConfig`] and [`KEY_BINDINGS`] so the two
//! cannot drift apart.

use crate::navigation::{NavigationConfig, KEY_BINDINGS};

const NAVIGATION_SCRIPT: &str = r#"(function () {
  "use strict";
  var INTERSECTION_THRESHOLD = __INTERSECTION_THRESHOLD__;
  var SWIPE_THRESHOLD = __SWIPE_THRESHOLD__;
  var KEY_BINDINGS = __KEY_BINDINGS__;

  var slides = Array.prototype.slice.call(document.querySelectorAll(".slide"));
  var dots = Array.prototype.slice.call(document.querySelectorAll(".dot"));
  var progressBar = document.getElementById("progress-bar");
  var counterCurrent = document.getElementById("counter-current");
  var state = { current: 0, count: slides.length };
  var unchanged = function (s) { return { state: s, effects: [] }; };

  function viewportFraction(visibleHeight, viewportHeight) {
    if (!(viewportHeight > 0) || !isFinite(visibleHeight)) { return 0; }
    return Math.min(1, Math.max(0, visibleHeight / viewportHeight));
  }

  function progressPercent(index, count) {
    return count === 0 ? 0 : (index + 1) / count * 100;
  }

  function indicatorEffects(index, count) {
    return [
      { type: "progress", value: progressPercent(index, count) },
      { type: "counter", current: index + 1, total: count },
      { type: "dot", index: index },
      { type: "animate", index: index }
    ];
  }

  function target(s, command, index) {
    if (s.count === 0) { return null; }
    var t;
    switch (command) {
      case "next": t = s.current + 1; break;
      case "previous": t = s.current - 1; break;
      case "first": t = 0; break;
      case "last": t = s.count - 1; break;
      case "goto": t = index; break;
      default: return null;
    }
    return (typeof t === "number" && t >= 0 && t < s.count) ? t : null;
  }

  function applyCommand(s, command, index) {
    var t = target(s, command, index);
    if (t === null) { return unchanged(s); }
    return {
      state: { current: t, count: s.count },
      effects: [{ type: "scroll", index: t }].concat(indicatorEffects(t, s.count))
    };
  }

  function transition(s, event) {
    switch (event.type) {
      case "intersection":
        if (!(event.index >= 0 && event.index < s.count) || event.ratio < INTERSECTION_THRESHOLD) {
          return unchanged(s);
        }
        return {
          state: { current: event.index, count: s.count },
          effects: indicatorEffects(event.index, s.count)
        };
      case "command":
        return applyCommand(s, event.command, event.index);
      case "key":
        if (!Object.prototype.hasOwnProperty.call(KEY_BINDINGS, event.key)) { return unchanged(s); }
        return applyCommand(s, KEY_BINDINGS[event.key]);
      case "swipe":
        if (Math.abs(event.deltaY) <= SWIPE_THRESHOLD) { return unchanged(s); }
        return applyCommand(s, event.deltaY > 0 ? "next" : "previous");
      default:
        return unchanged(s);
    }
  }

  function applyEffect(effect) {
    switch (effect.type) {
      case "scroll":
        slides[effect.index].scrollIntoView({ behavior: "smooth", block: "start" });
        break;
      case "progress":
        if (progressBar) { progressBar.style.width = effect.value + "%"; }
        break;
      case "counter":
        if (counterCurrent) { counterCurrent.textContent = String(effect.current); }
        break;
      case "dot":
        dots.forEach(function (dot, i) {
          dot.classList.toggle("active", i === effect.index);
          dot.setAttribute("aria-current", i === effect.index ? "true" : "false");
        });
        break;
      case "animate":
        var slide = slides[effect.index];
        slide.classList.remove("is-visible");
        void slide.offsetWidth;
        slide.classList.add("is-visible");
        break;
    }
  }

  function dispatch(event) {
    var result = transition(state, event);
    state = result.state;
    result.effects.forEach(applyEffect);
    return result.effects.length > 0;
  }

  if ("IntersectionObserver" in window) {
    var thresholds = [];
    for (var step = 0; step <= 20; step++) { thresholds.push(step / 20); }
    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (!entry.isIntersecting) { return; }
        var viewportHeight = entry.rootBounds ? entry.rootBounds.height : window.innerHeight;
        dispatch({
          type: "intersection",
          index: Number(entry.target.getAttribute("data-index")),
          ratio: viewportFraction(entry.intersectionRect.height, viewportHeight)
        });
      });
    }, { threshold: thresholds });
    slides.forEach(function (slide) { observer.observe(slide); });
  }

  document.addEventListener("keydown", function (e) {
    if (e.altKey || e.ctrlKey || e.metaKey) { return; }
    if (dispatch({ type: "key", key: e.key })) { e.preventDefault(); }
  });

  dots.forEach(function (dot) {
    dot.addEventListener("click", function () {
      dispatch({ type: "command", command: "goto", index: Number(dot.getAttribute("data-index")) });
    });
  });

  var touchStartY = null;
  document.addEventListener("touchstart", function (e) {
    touchStartY = e.touches.length > 0 ? e.touches[0].clientY : null;
  }, { passive: true });
  document.addEventListener("touchend", function (e) {
    if (touchStartY === null || e.changedTouches.length === 0) { return; }
    var deltaY = touchStartY - e.changedTouches[0].clientY;
    touchStartY = null;
    dispatch({ type: "swipe", deltaY: deltaY });
  }, { passive: true });

  if (slides.length > 0) { slides[0].classList.add("is-visible"); }
})();"#;

/// JSON object mapping key names to command names.
fn key_bindings_json() -> String {
    let map: serde_json::Map<String, serde_json::Value> = KEY_BINDINGS
        .iter()
        .filter_map(|(key, command)| {
            command
                .script_name()
                .map(|name| (key.to_string(), serde_json::Value::from(name)))
        })
        .collect();
    serde_json::Value::Object(map).to_string()
}

/// Build the navigation script for a document.
pub fn navigation_script(config: &NavigationConfig) -> String {
    NAVIGATION_SCRIPT
        .replace(
            "__INTERSECTION_THRESHOLD__",
            &config.intersection_threshold.to_string(),
        )
        .replace("__SWIPE_THRESHOLD__", &config.swipe_threshold.to_string())
        .replace("__KEY_BINDINGS__", &key_bindings_json())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_interpolated() {
        let script = navigation_script(&NavigationConfig::default());
        assert!(script.contains("var INTERSECTION_THRESHOLD = 0.5;"));
        assert!(script.contains("var SWIPE_THRESHOLD = 50;"));
        assert!(!script.contains("__"));
    }

    #[test]
    fn test_custom_thresholds() {
        let config = NavigationConfig::new()
            .with_intersection_threshold(0.75)
            .with_swipe_threshold(80.0);
        let script = navigation_script(&config);
        assert!(script.contains("var INTERSECTION_THRESHOLD = 0.75;"));
        assert!(script.contains("var SWIPE_THRESHOLD = 80;"));
    }

    #[test]
    fn test_thresholds_keep_full_precision() {
        let config = NavigationConfig::new()
            .with_intersection_threshold(0.333)
            .with_swipe_threshold(42.125);
        let script = navigation_script(&config);
        assert!(script.contains("var INTERSECTION_THRESHOLD = 0.333;"));
        assert!(script.contains("var SWIPE_THRESHOLD = 42.125;"));
    }

    #[test]
    fn test_intersection_ratio_measured_against_viewport() {
        let script = navigation_script(&NavigationConfig::default());
        assert!(script.contains("viewportFraction(entry.intersectionRect.height, viewportHeight)"));
        assert!(!script.contains("ratio: entry.intersectionRatio"));
    }

    #[test]
    fn test_key_bindings_match_controller() {
        let json = key_bindings_json();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        for (key, command) in KEY_BINDINGS {
            assert_eq!(
                parsed[*key].as_str(),
                command.script_name(),
                "binding for {:?}",
                key
            );
        }
    }

    #[test]
    fn test_script_is_deterministic() {
        let config = NavigationConfig::default();
        assert_eq!(navigation_script(&config), navigation_script(&config));
    }
}
