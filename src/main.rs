mod app_config;
mod assets;
mod bento_app;
mod input;
mod switch_view;

fn main() {
    bento_app::run();
}
