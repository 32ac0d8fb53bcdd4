use askyart::{ResizeRequest, plan};

fn main() {
    println!("Askyart - Resize Planning Demo");
    println!("==============================\n");

    let sources = vec![
        (100, 100, "100x100 (square)"),
        (1920, 1080, "1920x1080 (Full HD)"),
        (480, 640, "480x640 (portrait)"),
    ];

    let requests = vec![
        ("default", ResizeRequest::default()),
        ("--width 120", ResizeRequest::width(120)),
        ("--height 40", ResizeRequest::height(40)),
        ("--scale 0.1", ResizeRequest::scale(0.1)),
        (
            "--width 120 --height 40",
            ResizeRequest {
                width: Some(120),
                height: Some(40),
                scale: None,
            },
        ),
    ];

    for (width, height, description) in sources {
        println!("Source: {}", description);
        for (label, request) in &requests {
            match plan(width, height, request) {
                Ok(target) => println!(
                    "  {:<24} -> {}x{} ({:?})",
                    label,
                    target.width,
                    target.height,
                    request.directive()
                ),
                Err(e) => println!("  {:<24} -> error: {}", label, e),
            }
        }
        println!();
    }

    match plan(0, 100, &ResizeRequest::default()) {
        Ok(_) => println!("unexpected success for a 0x100 source"),
        Err(e) => println!("0x100 source: {}", e),
    }
}
