/// Basic example: render a generated test image to the terminal
///
/// Draws a white circle with a red diagonal on a gray background and prints
/// it in both grayscale and true-color modes.
use askyart::{AsciiConfig, ResizeRequest, process_image};
use image::{DynamicImage, Rgb, RgbImage};

fn main() {
    println!("Askyart - Basic Example");
    println!("=======================\n");

    let width = 160;
    let height = 160;
    let mut img = RgbImage::from_pixel(width, height, Rgb([100, 100, 100]));

    // Draw a white circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 50.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgb([255, 255, 255]));
            } else if (dist - radius).abs() < 5.0 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
    }

    // Draw a diagonal line
    for i in 0..width {
        img.put_pixel(i, i, Rgb([255, 0, 0]));
    }

    println!("Created test image: {}x{}\n", width, height);
    let img = DynamicImage::ImageRgb8(img);

    let gray = AsciiConfig {
        grayscale: true,
        resize: ResizeRequest::height(32),
        ..Default::default()
    };
    let art = process_image(&img, &gray).expect("grayscale conversion failed");
    print!("{}", art);

    let color = AsciiConfig {
        resize: ResizeRequest::height(32),
        ..Default::default()
    };
    let art = process_image(&img, &color).expect("color conversion failed");
    print!("{}", art);
    // Color escapes are left active after the last glyph
    println!("\x1b[0m");
}
