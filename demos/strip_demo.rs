use std::f32::consts::PI;

use strip2d::prelude::*;

/// Fixed tick in milliseconds, roughly 60hz
const TICK: f32 = 16.0;

fn build_sheet(config: &AnimationConfig) -> Image {
    let colors = [RED, ORANGE, YELLOW, LIME, BLUE, PURPLE];
    let mut sheet = Image::new(
        config.frame_width * config.frame_count as u32,
        config.frame_height,
    );
    for i in 0..config.frame_count {
        let color = colors[i % colors.len()];
        let x0 = i as u32 * config.frame_width;
        // a bar whose height grows with the frame index
        let bar = config.frame_height * (i as u32 + 1) / config.frame_count as u32;
        for x in x0..x0 + config.frame_width {
            for y in config.frame_height - bar..config.frame_height {
                sheet.as_rgba_mut().put_pixel(x, y, color.into());
            }
        }
    }
    sheet
}

fn main() -> Result<()> {
    env_logger::init();
    let config = AnimationConfig::from_json(
        r#"{"frame_width": 16, "frame_height": 16, "frame_count": 6, "speed": 50.0, "autostart": true}"#,
    )?;
    let sheet = build_sheet(&config);
    let mut anim = AnimatedSprite::from_config(&sheet, &config);
    anim.set_visible(true);
    anim.set_pos(Vec2::new(8.0, 8.0));
    anim.set_angle(PI / 4.0);

    let out_dir = std::env::temp_dir().join("strip2d");
    std::fs::create_dir_all(&out_dir)?;
    let mut last_frame = None;
    let mut tick = 0;
    while anim.is_animating() {
        if last_frame != Some(anim.current_frame()) {
            let mut canvas = Canvas::new(32, 32);
            canvas.clear(BLACK);
            anim.draw(&mut canvas);
            let path = out_dir.join(format!("frame_{}.png", anim.current_frame()));
            canvas.into_image().into_rgba().save(&path)?;
            log::info!("tick {tick} wrote {}", path.display());
            last_frame = Some(anim.current_frame());
        }
        anim.heartbeat(TICK);
        tick += 1;
    }
    log::info!("single pass finished after {tick} ticks");
    Ok(())
}
