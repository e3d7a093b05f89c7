use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

pub const NAVY: &str = "#070a12";
pub const NAVY_LIGHT: &str = "#101827";
pub const CARD: &str = "#0e1523";
pub const GOLD: &str = "#f5b301";
pub const GOLD_DARK: &str = "#d69c00";
pub const SAGE: &str = "#9cc5a1";
pub const GRAY_TEXT: &str = "#a3acbb";
pub const GRAY_LIGHT: &str = "#f2f4f7";

/// Colour tokens and the handful of classes every section shares.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    let style = css!(
        r#"
        :root {
            --navy: ${navy};
            --navy-light: ${navy_light};
            --card: ${card};
            --gold: ${gold};
            --gold-dark: ${gold_dark};
            --sage: ${sage};
            --gray-text: ${gray_text};
            --gray-light: ${gray_light};
        }

        *, *::before, *::after {
            box-sizing: border-box;
        }

        html {
            scroll-behavior: auto;
        }

        body {
            margin: 0;
            background: var(--navy);
            color: #fff;
            font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            -webkit-font-smoothing: antialiased;
        }

        a {
            color: inherit;
            text-decoration: none;
        }

        img {
            display: block;
            max-width: 100%;
        }

        .pin-spacer {
            position: relative;
        }

        .section-pinned {
            position: sticky;
            top: 0;
            height: 100vh;
            width: 100%;
            overflow: hidden;
        }

        .section-inner {
            position: relative;
            z-index: 20;
            height: 100%;
            display: flex;
            align-items: center;
            padding: 0 7vw;
        }

        .backdrop {
            position: absolute;
            inset: 0;
        }

        .backdrop img {
            width: 100%;
            height: 100%;
            object-fit: cover;
        }

        .backdrop::after {
            content: "";
            position: absolute;
            inset: 0;
            background: linear-gradient(90deg, rgba(7, 10, 18, 0.92), rgba(7, 10, 18, 0.65) 55%, rgba(7, 10, 18, 0.45));
        }

        .eyebrow {
            display: block;
            margin-bottom: 1rem;
            font-family: "JetBrains Mono", monospace;
            font-size: 0.75rem;
            letter-spacing: 0.12em;
            text-transform: uppercase;
            color: var(--gold);
        }

        .heading {
            margin: 0 0 1.5rem;
            font-weight: 900;
            font-size: clamp(2rem, 5vw, 3.75rem);
            line-height: 0.95;
        }

        .lead {
            margin: 0 0 2rem;
            max-width: 34rem;
            font-size: 1.125rem;
            line-height: 1.6;
            color: var(--gray-text);
        }

        .text-gold { color: var(--gold); }
        .text-sage { color: var(--sage); }

        .btn-gold {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 1.1rem 2rem;
            border: none;
            border-radius: 0.5rem;
            background: var(--gold);
            color: var(--navy);
            font-weight: 700;
            font-size: 1rem;
            cursor: pointer;
            transition: background 0.2s ease, transform 0.2s ease;
        }

        .btn-gold:hover {
            background: var(--gold-dark);
            transform: translateY(-2px);
        }

        .btn-outline {
            display: inline-flex;
            align-items: center;
            padding: 1.1rem 2rem;
            border: 1px solid rgba(255, 255, 255, 0.3);
            border-radius: 0.5rem;
            background: transparent;
            color: #fff;
            font-size: 1rem;
            cursor: pointer;
        }

        .btn-outline:hover {
            background: rgba(255, 255, 255, 0.1);
        }

        .glass-card {
            background: rgba(14, 21, 35, 0.8);
            backdrop-filter: blur(6px);
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 1rem;
        }

        [data-anim] {
            will-change: transform, opacity;
        }
        "#,
        navy = NAVY,
        navy_light = NAVY_LIGHT,
        card = CARD,
        gold = GOLD,
        gold_dark = GOLD_DARK,
        sage = SAGE,
        gray_text = GRAY_TEXT,
        gray_light = GRAY_LIGHT,
    );

    html! {
        <>
            <Global css={style} />
            <style>
                {r#"
                @keyframes pulseSlow {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }
                "#}
            </style>
        </>
    }
}
