//! Table box management.

use table_core::TableGeometry;

use crate::sub_renderers::{BoxData, BoxInstance, BoxRenderer};

/// GPU boxes for the table: top first, then the four legs.
#[derive(Default)]
pub struct TableMeshes {
    boxes: Vec<BoxData>,
}

impl TableMeshes {
    /// Create an empty set; boxes are allocated on the first sync.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the GPU boxes in line with `geometry`.
    pub fn sync(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        box_renderer: &BoxRenderer,
        geometry: &TableGeometry,
    ) {
        let instances: Vec<BoxInstance> = geometry.boxes().map(BoxInstance::from_primitive).collect();

        if self.boxes.len() != instances.len() {
            tracing::debug!("Allocating {} table boxes", instances.len());
            self.boxes = instances
                .into_iter()
                .map(|instance| box_renderer.create_box(device, instance))
                .collect();
            return;
        }

        for (data, instance) in self.boxes.iter_mut().zip(instances) {
            data.update(queue, instance);
        }
    }

    /// Whether any boxes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Get an iterator over all boxes.
    pub fn iter(&self) -> impl Iterator<Item = &BoxData> {
        self.boxes.iter()
    }
}
