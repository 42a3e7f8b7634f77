use digitpad::DigitPad;
use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    Application::new().run(|cx: &mut App| {
        info!("starting digitpad");

        let bounds = Bounds::centered(None, size(px(980.0), px(640.0)), cx);
        let window = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Digitpad".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_window, cx| cx.new(DigitPad::new),
        );

        match window {
            Ok(_) => cx.activate(true),
            Err(e) => {
                error!("failed to open window: {e}");
                cx.quit();
            }
        }
    });
}
