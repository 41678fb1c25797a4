use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
}

/// Scatters `count` particles over the page. Positions are percentages,
/// size in px, timings in seconds.
pub fn particle_layout(count: usize) -> Vec<Particle> {
    // Weyl sequences on a few irrational steps; looks random, stays stable
    // across re-renders.
    let frac = |i: usize, step: f64| ((i as f64 + 1.0) * step).fract();
    (0..count)
        .map(|i| Particle {
            size: 3.0 + frac(i, 0.754_877_666) * 6.0,
            left: frac(i, 0.618_033_988) * 100.0,
            top: frac(i, 0.569_840_291) * 100.0,
            delay: frac(i, 0.414_213_562) * 8.0,
            duration: 15.0 + frac(i, 0.732_050_808) * 15.0,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct BackdropProps {
    pub pointer: (f64, f64),
    pub scroll_progress: f64,
}

/// Decorative layers behind the page content: logo tile, particles, a glow
/// following the pointer and the reading progress bar.
#[function_component(Backdrop)]
pub fn backdrop(props: &BackdropProps) -> Html {
    let particles = use_memo(|count| particle_layout(*count), config::PARTICLE_COUNT);
    let (x, y) = props.pointer;

    html! {
        <>
            <div
                class="logo-pattern"
                style={format!("background-image: url(\"{}\");", config::LOGO_ASSET)}
            />
            <div class="gradient-overlay" />
            <div class="particles">
                { for particles.iter().map(|p| html! {
                    <div
                        class="particle"
                        style={format!(
                            "width: {size:.2}px; height: {size:.2}px; left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                            p.left, p.top, p.delay, p.duration, size = p.size
                        )}
                    />
                }) }
            </div>
            <div class="pointer-glow" style={format!("left: {}px; top: {}px;", x, y)} />
            <div class="progress-bar" style={format!("width: {}%;", props.scroll_progress)} />
        </>
    }
}
