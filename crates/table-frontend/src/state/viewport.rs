//! Viewport rendering state

use std::sync::Arc;

use parking_lot::Mutex;

use table_core::{Aabb, TableGeometry};
use table_renderer::{Renderer, RendererConfig};

use super::SharedTableStore;

/// Render texture for viewport
struct RenderTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    egui_texture_id: egui::TextureId,
    width: u32,
    height: u32,
}

/// Latest table geometry waiting to be uploaded
///
/// Written by the store subscriber, drained by the viewport right before it
/// renders. Only the newest geometry is kept.
#[derive(Clone, Default)]
pub struct PendingGeometry(Arc<Mutex<Option<TableGeometry>>>);

impl PendingGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is pending
    pub fn publish(&self, geometry: TableGeometry) {
        *self.0.lock() = Some(geometry);
    }

    /// Take the pending geometry, if any
    pub fn take(&self) -> Option<TableGeometry> {
        self.0.lock().take()
    }

    pub fn is_pending(&self) -> bool {
        self.0.lock().is_some()
    }
}

/// Subscribe the viewport to the store.
///
/// The current parameters are published immediately; every later mutation
/// derives fresh geometry and calls `request_repaint`.
pub fn connect_viewport<F>(store: &SharedTableStore, request_repaint: F) -> PendingGeometry
where
    F: Fn() + Send + 'static,
{
    let pending = PendingGeometry::new();
    let mut store = store.lock();
    pending.publish(TableGeometry::from_parameters(&store.snapshot()));

    let sink = pending.clone();
    let id = store.subscribe(move |params| {
        sink.publish(TableGeometry::from_parameters(params));
        request_repaint();
    });
    tracing::debug!(?id, "Viewport subscribed to table store");

    pending
}

/// Viewport rendering state
pub struct ViewportState {
    pub renderer: Renderer,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    render_texture: Option<RenderTexture>,
    pending: PendingGeometry,
    table_bounds: Option<Aabb>,
}

impl ViewportState {
    /// Create a new viewport state
    pub fn new(
        device: wgpu::Device,
        queue: wgpu::Queue,
        format: wgpu::TextureFormat,
        config: &RendererConfig,
        pending: PendingGeometry,
    ) -> Self {
        let (width, height) = table_renderer::constants::viewport::INITIAL_SIZE;
        let renderer = Renderer::new(&device, format, width, height, config);
        Self {
            renderer,
            device,
            queue,
            render_texture: None,
            pending,
            table_bounds: None,
        }
    }

    /// Ensure the render texture matches the requested size
    pub fn ensure_texture(
        &mut self,
        width: u32,
        height: u32,
        egui_renderer: &mut egui_wgpu::Renderer,
    ) -> egui::TextureId {
        let width = width.max(1);
        let height = height.max(1);

        let render_texture = match self.render_texture.take() {
            Some(rt) if rt.width == width && rt.height == height => rt,
            old => {
                // Free old texture if exists
                if let Some(old) = old {
                    egui_renderer.free_texture(&old.egui_texture_id);
                }
                self.create_render_texture(width, height, egui_renderer)
            }
        };

        let id = render_texture.egui_texture_id;
        self.render_texture = Some(render_texture);
        id
    }

    fn create_render_texture(
        &mut self,
        width: u32,
        height: u32,
        egui_renderer: &mut egui_wgpu::Renderer,
    ) -> RenderTexture {
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Viewport Render Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.renderer.format(),
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Register with egui
        let egui_texture_id =
            egui_renderer.register_native_texture(&self.device, &view, wgpu::FilterMode::Linear);

        self.renderer.resize(&self.device, width, height);

        RenderTexture {
            texture,
            view,
            egui_texture_id,
            width,
            height,
        }
    }

    /// Upload pending table geometry; returns true if anything changed
    pub fn sync_table(&mut self) -> bool {
        let Some(geometry) = self.pending.take() else {
            return false;
        };
        self.renderer.set_table(&self.device, &self.queue, &geometry);
        self.table_bounds = Some(geometry.bounds());
        true
    }

    /// Render the 3D scene to the texture
    pub fn render(&mut self) {
        self.sync_table();

        let Some(ref rt) = self.render_texture else {
            return;
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Viewport Render Encoder"),
            });

        self.renderer.render(&mut encoder, &rt.view, &self.queue);

        self.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Frame the current table
    pub fn fit_table(&mut self) {
        if let Some(bounds) = self.table_bounds {
            self.renderer
                .camera_mut()
                .fit_sphere(bounds.center(), bounds.radius());
        }
    }

    /// Return the camera to its default pose
    pub fn reset_camera(&mut self) {
        self.renderer.camera_mut().reset();
    }

    /// Apply renderer settings (theme background, lighting, camera)
    pub fn apply_config(&mut self, config: &RendererConfig) {
        self.renderer.apply_config(config);
    }
}

/// Shared viewport state handle
pub type SharedViewportState = Arc<Mutex<ViewportState>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use approx::assert_abs_diff_eq;
    use table_core::{TableColor, TableParameters};

    use crate::state::create_shared_store;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = count.clone();
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_initial_geometry_published() {
        let store = create_shared_store(TableParameters::default());
        let (repaints, repaint) = counter();
        let pending = connect_viewport(&store, repaint);

        let geometry = pending.take().unwrap();
        assert_abs_diff_eq!(geometry.top.size.x, 2.0);
        assert_eq!(repaints.load(Ordering::SeqCst), 0);
        assert!(pending.take().is_none());
    }

    #[test]
    fn test_setter_publishes_and_repaints() {
        let store = create_shared_store(TableParameters::default());
        let (repaints, repaint) = counter();
        let pending = connect_viewport(&store, repaint);
        pending.take();

        store.lock().set_width(3.0);
        assert_eq!(repaints.load(Ordering::SeqCst), 1);

        let geometry = pending.take().unwrap();
        assert_abs_diff_eq!(geometry.top.size.x, 3.0);
        assert_abs_diff_eq!(geometry.legs[1].center.x, 1.45, epsilon = 1e-6);
    }

    #[test]
    fn test_only_latest_geometry_kept() {
        let store = create_shared_store(TableParameters::default());
        let (repaints, repaint) = counter();
        let pending = connect_viewport(&store, repaint);

        {
            let mut store = store.lock();
            store.set_width(4.0);
            store.set_thickness(0.3);
            store.set_color(TableColor::RoyalBlue);
        }
        assert_eq!(repaints.load(Ordering::SeqCst), 3);

        let geometry = pending.take().unwrap();
        assert_abs_diff_eq!(geometry.top.size.x, 4.0);
        assert_abs_diff_eq!(geometry.top.size.y, 0.3);
        assert!(geometry.top_color_is(TableColor::RoyalBlue));
        assert!(!pending.is_pending());
    }

    #[test]
    fn test_unchanged_value_still_repaints() {
        let store = create_shared_store(TableParameters::default());
        let (repaints, repaint) = counter();
        let pending = connect_viewport(&store, repaint);
        pending.take();

        store.lock().set_color(TableColor::Brown);
        assert_eq!(repaints.load(Ordering::SeqCst), 1);
        assert!(pending.is_pending());
    }
}
