mod app;
mod command;
mod tabs;
mod ui;
mod util;
mod views;

fn main() -> anyhow::Result<()> {
    command::run()
}
