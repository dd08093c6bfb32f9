//! Global CSS for the Soon screen.
//!
//! Per-element colors and sizes are inline; this sheet only carries the
//! reset and the snowflake animation.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
}

html, body {
  margin: 0;
  padding: 0;
  background: #111111;
}

/* === Headline === */
.soon-headline {
  margin: 0.67em 0;
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
  font-size: 2em;
  font-weight: 700;
}

/* === Snowfall === */
.snowflake {
  position: absolute;
  top: 0;
  border-radius: 50%;
  animation-name: snowfall-drop;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
  will-change: transform;
}

@keyframes snowfall-drop {
  from {
    transform: translate3d(0, -10vh, 0);
  }
  to {
    transform: translate3d(var(--snowflake-drift, 0px), 110vh, 0);
  }
}

@media (prefers-reduced-motion: reduce) {
  .snowflake {
    animation-play-state: paused;
  }
}
"#;
