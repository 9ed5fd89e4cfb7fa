//! Async image -> GPU texture cache.
//!
//! Sheets are requested by path; the first request kicks off an async
//! decode + upload and the renderer keeps drawing the fallback texture until
//! the real one lands. Paths are interned `&'static str`s from the scene
//! tables, so the cache never copies keys.

use fnv::{FnvHashMap, FnvHashSet};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct LoadedTexture {
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

#[derive(Default)]
struct CacheInner {
    loaded: FnvHashMap<&'static str, LoadedTexture>,
    in_flight: FnvHashSet<&'static str>,
}

#[derive(Clone)]
pub struct TextureCache {
    inner: Rc<RefCell<CacheInner>>,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl TextureCache {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CacheInner::default())),
            device,
            queue,
        }
    }

    pub fn get(&self, path: &str) -> Option<Ref<'_, LoadedTexture>> {
        Ref::filter_map(self.inner.borrow(), |c| c.loaded.get(path)).ok()
    }

    /// Ensure `path` is loaded or loading. Returns immediately.
    pub fn request(&self, path: &'static str) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.loaded.contains_key(path) || inner.in_flight.contains(path) {
                return;
            }
            inner.in_flight.insert(path);
        }
        let cache = self.clone();
        spawn_local(async move {
            match load_texture(&cache.device, &cache.queue, path).await {
                Ok(tex) => {
                    let mut inner = cache.inner.borrow_mut();
                    inner.in_flight.remove(path);
                    inner.loaded.insert(path, tex);
                }
                Err(e) => {
                    // Stays in_flight so a broken path is only fetched once.
                    log::error!("texture load failed for {:?}: {:?}", path, e);
                }
            }
        });
    }
}

async fn load_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    path: &str,
) -> anyhow::Result<LoadedTexture> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(path);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("decode {:?}: {:?}", path, e))?;

    let promise = window
        .create_image_bitmap_with_html_image_element(&img)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let bitmap: web::ImageBitmap = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("createImageBitmap {:?}: {:?}", path, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (width, height) = (bitmap.width(), bitmap.height());
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(path),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    queue.copy_external_image_to_texture(
        &wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::ImageBitmap(bitmap),
            origin: wgpu::Origin2d::ZERO,
            flip_y: false,
        },
        wgpu::CopyExternalImageDestInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
            color_space: wgpu::PredefinedColorSpace::Srgb,
            premultiplied_alpha: false,
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    Ok(LoadedTexture {
        view,
        width,
        height,
    })
}
