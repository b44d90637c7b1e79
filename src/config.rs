use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_content")]
    pub content: String,

    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default = "default_output")]
    pub output: String,
}

fn default_content() -> String {
    "content".to_string()
}
fn default_template() -> String {
    "template.html".to_string()
}
fn default_static_dir() -> String {
    "static".to_string()
}
fn default_output() -> String {
    "public".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content: default_content(),
            template: default_template(),
            static_dir: default_static_dir(),
            output: default_output(),
        }
    }
}
