use field_core::PointCloud;
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
    pub(crate) tint: [f32; 4],
}

/// GPU copies of one cloud's position and color buffers plus its transform.
pub(crate) struct CloudBuffers {
    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    count: u32,
    alpha: f32,
}

impl CloudBuffers {
    pub(crate) fn new(
        device: &wgpu::Device,
        bgl: &wgpu::BindGroupLayout,
        cloud: &PointCloud,
        label: &str,
        alpha: f32,
    ) -> Self {
        let positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_positions")),
            contents: bytemuck::cast_slice(cloud.positions()),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let colors = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_colors")),
            contents: bytemuck::cast_slice(cloud.colors()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label}_uniforms")),
            size: std::mem::size_of::<PointUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label}_bg")),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            positions,
            colors,
            uniform_buffer,
            bind_group,
            count: cloud.len() as u32,
            alpha,
        }
    }

    /// Upload displaced positions if the cloud changed, and the transform.
    pub(crate) fn upload(&self, queue: &wgpu::Queue, cloud: &mut PointCloud, view_proj: Mat4) {
        if cloud.take_needs_update() && self.count > 0 {
            queue.write_buffer(&self.positions, 0, bytemuck::cast_slice(cloud.positions()));
        }
        let u = PointUniforms {
            mvp: (view_proj * cloud.model_matrix()).to_cols_array_2d(),
            tint: [1.0, 1.0, 1.0, self.alpha],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.positions.slice(..));
        rpass.set_vertex_buffer(1, self.colors.slice(..));
        rpass.draw(0..self.count, 0..1);
    }
}
