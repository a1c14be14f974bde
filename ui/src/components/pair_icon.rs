#![allow(non_snake_case)]

use api::pair::Pair;
use api::prefs::asset_host::AssetHost;
use dioxus::prelude::*;

/// Renders a pair as `[base icon] BASE ⇄ [quote icon] QUOTE`.
///
/// Keys without a `/` render as a base-only cell.
#[component]
pub fn PairIcon(pair: String, asset_host: AssetHost) -> Element {
    let pair = Pair::lenient(&pair);
    let base = pair.base().to_string();
    let base_icon = asset_host.icon_url(&base);
    let quote = pair.quote().map(|q| (q.to_string(), asset_host.icon_url(q)));

    rsx! {
        span {
            style: "white-space: nowrap;",
            img {
                src: "{base_icon}",
                alt: "{base}",
                height: "25px",
            }
            span {
                style: "margin-left: 10px;",
                "{base}"
            }
            if let Some((quote, quote_icon)) = quote {
                span {
                    style: "margin-left: 10px; margin-right: 10px;",
                    "⇄"
                }
                img {
                    src: "{quote_icon}",
                    alt: "{quote}",
                    height: "25px",
                }
                span {
                    style: "margin-left: 10px;",
                    "{quote}"
                }
            }
        }
    }
}
