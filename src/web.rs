use image::RgbaImage;
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::{console, ImageData};

use crate::config::LevelConfig;
use crate::level::{LevelGenerator, DEFAULT_ITERATIONS};
use crate::texture::TexturePool;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_rgba(image_data: &ImageData) -> Result<RgbaImage, JsValue> {
    RgbaImage::from_raw(image_data.width(), image_data.height(), image_data.data().0)
        .ok_or_else(|| "Image data does not match its dimensions".into())
}

#[wasm_bindgen]
pub struct WasmLevelGenerator {
    generator: LevelGenerator,
}

#[wasm_bindgen]
impl WasmLevelGenerator {
    #[wasm_bindgen(constructor)]
    pub fn new(
        grid_size: usize,
        room_size: u32,
        corridor_width: u32,
        corridor_length: u32,
        seed: Option<u64>,
    ) -> Result<WasmLevelGenerator, JsValue> {
        init_panic_hook();

        let config = LevelConfig::new(grid_size, room_size, corridor_width, corridor_length);
        config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;

        let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * (u64::MAX as f64)) as u64);

        console::log_1(&format!("Using seed: {}", seed).into());

        Ok(Self {
            generator: LevelGenerator::new(config, Some(seed)),
        })
    }

    /// Textures are decoded by the page; every entry must be an `ImageData`.
    #[wasm_bindgen]
    pub fn load_textures(&mut self, textures: &js_sys::Array) -> Result<(), JsValue> {
        let mut images = Vec::with_capacity(textures.length() as usize);

        for texture in textures.iter() {
            let image_data = texture.dyn_into::<ImageData>()?;
            images.push(to_rgba(&image_data)?);
        }

        let pool = TexturePool::new(images).map_err(|e| JsValue::from_str(&e.to_string()))?;

        console::log_1(&format!("{} textures loaded", pool.len()).into());

        self.generator.set_textures(pool);

        Ok(())
    }

    #[wasm_bindgen]
    pub fn create_maze(&mut self, iterations: Option<usize>) {
        self.generator.create_maze(iterations.unwrap_or(DEFAULT_ITERATIONS));
    }

    #[wasm_bindgen]
    pub fn textures_loaded(&self) -> bool {
        self.generator.textures_loaded()
    }

    #[wasm_bindgen]
    pub fn render(&mut self) -> Result<ImageData, JsValue> {
        let level = self
            .generator
            .render()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        ImageData::new_with_u8_clamped_array_and_sh(Clamped(level.as_raw().as_slice()), level.width(), level.height())
    }
}
