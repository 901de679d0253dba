//! Floral Corner Component
//!
//! Decorative flower cluster drawn in each corner of the frame. Rotation
//! per corner comes from the stylesheet.

use leptos::prelude::*;

/// Petal outlines around a flower centered at (25, 25)
const PETALS: [&str; 4] = [
    "M25 15 Q20 8 15 15 Q8 25 15 25 Q25 32 25 25 Q32 25 25 15 Z",
    "M25 35 Q20 42 15 35 Q8 25 15 25 Q25 18 25 25 Q32 25 25 35 Z",
    "M15 25 Q8 20 15 15 Q25 8 25 15 Q32 25 25 25 Q25 32 15 25 Z",
    "M35 25 Q42 20 35 15 Q25 8 25 15 Q18 25 25 25 Q25 32 35 25 Z",
];

/// (cx, cy, rx, ry, rotation)
const LEAVES: [(u32, u32, u32, u32, i32); 3] = [(20, 35, 8, 4, 45), (35, 50, 6, 3, -30), (50, 20, 6, 3, 60)];

#[component]
pub fn FloralCorner(
    /// Which corner: "top-left", "top-right", "bottom-left" or "bottom-right"
    position: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("corner {}", position)>
            <svg class="floral" viewBox="0 0 120 120" fill="currentColor">
                <g transform="translate(10,10)">
                    <circle cx="25" cy="25" r="12" fill="#ec4899" opacity="0.7" />
                    {PETALS
                        .iter()
                        .map(|d| view! { <path d=*d fill="#f472b6" /> })
                        .collect_view()}
                    <circle cx="25" cy="25" r="4" fill="#fbbf24" />
                    <circle cx="45" cy="15" r="8" fill="#ec4899" opacity="0.6" />
                    <circle cx="45" cy="15" r="3" fill="#fbbf24" />
                    <circle cx="15" cy="45" r="8" fill="#ec4899" opacity="0.6" />
                    <circle cx="15" cy="45" r="3" fill="#fbbf24" />
                </g>
                <path
                    d="M5 5 Q15 15 25 5 Q35 15 45 5 Q55 15 65 5"
                    stroke="#16a34a"
                    stroke-width="3"
                    fill="none"
                />
                {LEAVES
                    .iter()
                    .map(|(cx, cy, rx, ry, rot)| {
                        view! {
                            <ellipse
                                cx=cx.to_string()
                                cy=cy.to_string()
                                rx=rx.to_string()
                                ry=ry.to_string()
                                fill="#22c55e"
                                opacity="0.6"
                                transform=format!("rotate({} {} {})", rot, cx, cy)
                            />
                        }
                    })
                    .collect_view()}
                <circle cx="55" cy="35" r="3" fill="#f472b6" opacity="0.8" />
                <circle cx="35" cy="65" r="2.5" fill="#ec4899" opacity="0.8" />
                <circle cx="65" cy="50" r="2" fill="#f472b6" opacity="0.8" />
            </svg>
        </div>
    }
}
