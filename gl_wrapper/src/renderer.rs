use log::info;

use crate::geometry::Geometry;
use crate::program::Program;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PolygonMode {
    Fill,
    Line,
}

pub struct GlRenderer {
    current_program: BoundProgram,
    depth_test: bool,
    polygon_mode: PolygonMode,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self {
            current_program: BoundProgram::default(),
            depth_test: false,
            polygon_mode: PolygonMode::Fill,
        }
    }

    pub fn use_program(&mut self, program: &Program) {
        if self.current_program.switch(program.serial()) {
            unsafe { gl::UseProgram(program.id()) }
        }
    }

    /// Draws the whole geometry, through its element buffer if it has one.
    pub fn draw(&mut self, geometry: &Geometry, program: &Program) {
        self.use_program(program);

        unsafe {
            gl::BindVertexArray(geometry.vao());
            if geometry.is_indexed() {
                gl::DrawElements(
                    gl::TRIANGLES,
                    geometry.indices() as i32,
                    gl::UNSIGNED_INT,
                    std::ptr::null(),
                );
            } else {
                gl::DrawArrays(gl::TRIANGLES, 0, geometry.vertices() as i32);
            }
        }
    }

    /// Draws `count` vertices starting at `first`, ignoring any element buffer.
    pub fn draw_range(&mut self, geometry: &Geometry, program: &Program, first: usize, count: usize) {
        let count = count.min(geometry.vertices().saturating_sub(first));
        self.use_program(program);

        unsafe {
            gl::BindVertexArray(geometry.vao());
            gl::DrawArrays(gl::TRIANGLES, first as i32, count as i32);
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32) {
        let mut mask = gl::COLOR_BUFFER_BIT;
        if self.depth_test {
            mask |= gl::DEPTH_BUFFER_BIT;
        }

        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(mask);
        }
    }

    pub fn set_depth_test(&mut self, enabled: bool) {
        unsafe {
            if enabled {
                gl::Enable(gl::DEPTH_TEST);
            } else {
                gl::Disable(gl::DEPTH_TEST);
            }
        }
        self.depth_test = enabled;
    }

    pub fn set_polygon_mode(&mut self, mode: PolygonMode) {
        if self.polygon_mode == mode {
            return;
        }

        let gl_mode = match mode {
            PolygonMode::Fill => gl::FILL,
            PolygonMode::Line => gl::LINE,
        };

        unsafe { gl::PolygonMode(gl::FRONT_AND_BACK, gl_mode) }
        self.polygon_mode = mode;
        info!("Polygon mode set to {mode:?}");
    }

    pub fn max_vertex_attribs(&self) -> i32 {
        let mut count = 0;
        unsafe { gl::GetIntegerv(gl::MAX_VERTEX_ATTRIBS, &mut count) }
        count
    }
}

impl Default for GlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Serial of the program last passed to `glUseProgram`, 0 before the first.
#[derive(Debug, Default)]
struct BoundProgram(u64);

impl BoundProgram {
    /// Records `serial` as bound, returns whether a bind is needed.
    fn switch(&mut self, serial: u64) -> bool {
        if self.0 == serial {
            return false;
        }
        self.0 = serial;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_program_binds_once() {
        let mut bound = BoundProgram::default();

        assert!(bound.switch(1));
        assert!(!bound.switch(1));
        assert!(bound.switch(2));
        assert!(bound.switch(1));
    }
}
