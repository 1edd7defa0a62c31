//! Embeds the clock glyph from `src/icon.rs` as the Windows executable icon.

#[allow(dead_code)]
#[path = "src/icon.rs"]
mod icon;

/// Sizes Explorer and the taskbar pick from.
#[cfg(windows)]
const ICON_SIZES: [u32; 3] = [16, 32, 48];

#[cfg(windows)]
fn write_ico(path: &std::path::Path) -> std::io::Result<()> {
    let mut dir = ico::IconDir::new(ico::ResourceType::Icon);
    for size in ICON_SIZES {
        let image = ico::IconImage::from_rgba_data(size, size, icon::clock_icon_rgba(size));
        dir.add_entry(ico::IconDirEntry::encode(&image)?);
    }
    dir.write(std::fs::File::create(path)?)
}

fn main() {
    println!("cargo:rerun-if-changed=src/icon.rs");

    #[cfg(windows)]
    {
        let out_dir = std::path::PathBuf::from(std::env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
        let ico_path = out_dir.join("analog-clock.ico");
        if let Err(e) = write_ico(&ico_path) {
            println!("cargo:warning=clock icon not generated: {e}");
            return;
        }

        let mut res = winres::WindowsResource::new();
        res.set_icon(&ico_path.to_string_lossy());
        if let Err(e) = res.compile() {
            println!("cargo:warning=clock icon not embedded, the window icon is still set at runtime: {e}");
        }
    }
}
