use maud::{html, Markup, PreEscaped, DOCTYPE};

pub struct PageConfig<'a> {
    pub title: &'a str,
    pub api_base: &'a str,
}

const LEAFLET_VERSION: &str = "1.9.4";

pub fn base(config: &PageConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                link rel="stylesheet"
                    href=(format!("https://unpkg.com/leaflet@{}/dist/leaflet.css", LEAFLET_VERSION));
                link rel="stylesheet" href="/static/styles.css";
                script src=(format!("https://unpkg.com/leaflet@{}/dist/leaflet.js", LEAFLET_VERSION)) {}
            }
            body {
                script {
                    (PreEscaped(format!("const API_BASE = \"{}\";", config.api_base)))
                }

                (content)

                script src="/static/viewer.js" {}
            }
        }
    }
}
