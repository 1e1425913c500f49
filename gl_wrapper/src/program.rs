use std::ffi::{c_char, CString};
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use cgmath::{Matrix, Matrix4, Vector3, Vector4};
use gl::types::{GLint, GLuint};
use log::{debug, trace};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(&self) -> GLuint {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl Display for ShaderStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

pub struct ProgramBuilder {
    vert: String,
    frag: String,
}

impl ProgramBuilder {
    pub fn new(vert_src: &str, frag_src: &str) -> Self {
        Self {
            vert: vert_src.to_owned(),
            frag: frag_src.to_owned(),
        }
    }

    /// Reads both stage sources from disk.
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(vert: P, frag: Q) -> Result<Self, PBError> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|source| PBError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        Ok(Self {
            vert: read(vert.as_ref())?,
            frag: read(frag.as_ref())?,
        })
    }

    pub fn build(self) -> Result<Program, PBError> {
        let vert_src =
            CString::new(self.vert).map_err(|_| PBError::InvalidSource(ShaderStage::Vertex))?;
        let frag_src =
            CString::new(self.frag).map_err(|_| PBError::InvalidSource(ShaderStage::Fragment))?;

        let vert = compile(ShaderStage::Vertex, &vert_src)?;
        let frag = match compile(ShaderStage::Fragment, &frag_src) {
            Ok(frag) => frag,
            Err(e) => {
                unsafe { gl::DeleteShader(vert) }
                return Err(e);
            }
        };

        let mut success: GLint = 0;

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success != gl::TRUE as GLint {
                let mut len: GLint = 0;
                gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);

                let mut buf = vec![0_u8; len.max(1) as usize];
                gl::GetProgramInfoLog(
                    program,
                    buf.len() as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);

                return Err(PBError::Linking(info_log_to_string(&buf)));
            }

            debug!("linked shader program {program}");

            Ok(Program {
                id: program,
                serial: next_serial(),
            })
        }
    }
}

fn compile(stage: ShaderStage, src: &CString) -> Result<GLuint, PBError> {
    let mut success: GLint = 0;

    unsafe {
        let shader = gl::CreateShader(stage.gl_kind());

        gl::ShaderSource(shader, 1, &src.as_ptr(), std::ptr::null());
        gl::CompileShader(shader);

        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        if success != gl::TRUE as GLint {
            let mut len: GLint = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);

            let mut buf = vec![0_u8; len.max(1) as usize];
            gl::GetShaderInfoLog(
                shader,
                buf.len() as i32,
                std::ptr::null_mut(),
                buf.as_mut_ptr() as *mut c_char,
            );
            gl::DeleteShader(shader);

            return Err(PBError::Compilation {
                stage,
                log: info_log_to_string(&buf),
            });
        }

        Ok(shader)
    }
}

/// Turns a driver info log into a string, cutting at the first NUL.
pub fn info_log_to_string(buf: &[u8]) -> String {
    let data = buf.split(|b| *b == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("{stage} shader failed to compile: {log}")]
    Compilation { stage: ShaderStage, log: String },
    #[error("program failed to link: {0}")]
    Linking(String),
    #[error("{0} shader source contains a NUL byte")]
    InvalidSource(ShaderStage),
    #[error("could not read shader source {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// GL reuses the names of deleted programs, the serial never repeats.
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

fn next_serial() -> u64 {
    NEXT_SERIAL.fetch_add(1, Ordering::Relaxed)
}

/// Linked shader program.
///
/// The `set_*` methods upload to whatever program is currently bound, so
/// bind this one through [`GlRenderer::use_program`](crate::renderer::GlRenderer::use_program) first.
pub struct Program {
    id: GLuint,
    serial: u64,
}

impl Program {
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Identifies this program for the lifetime of the process, unlike
    /// [`id`](Self::id).
    pub fn serial(&self) -> u64 {
        self.serial
    }

    fn location(&self, name: &str) -> Option<GLint> {
        let c_name = CString::new(name).ok()?;
        let loc = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };

        if loc == -1 {
            trace!("uniform {name} is not active in program {}", self.id);
            None
        } else {
            Some(loc)
        }
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_int(name, value as i32);
    }

    pub fn set_int(&self, name: &str, value: i32) {
        if let Some(loc) = self.location(name) {
            unsafe { gl::Uniform1i(loc, value) }
        }
    }

    pub fn set_float(&self, name: &str, value: f32) {
        if let Some(loc) = self.location(name) {
            unsafe { gl::Uniform1f(loc, value) }
        }
    }

    pub fn set_vec3(&self, name: &str, value: Vector3<f32>) {
        if let Some(loc) = self.location(name) {
            unsafe { gl::Uniform3f(loc, value.x, value.y, value.z) }
        }
    }

    pub fn set_vec4(&self, name: &str, value: Vector4<f32>) {
        if let Some(loc) = self.location(name) {
            unsafe { gl::Uniform4f(loc, value.x, value.y, value.z, value.w) }
        }
    }

    pub fn set_mat4(&self, name: &str, value: &Matrix4<f32>) {
        if let Some(loc) = self.location(name) {
            unsafe { gl::UniformMatrix4fv(loc, 1, gl::FALSE, value.as_ptr()) }
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_stops_at_nul() {
        let mut buf = b"0:3(1): error: syntax error\n".to_vec();
        buf.extend_from_slice(&[0, b'x', b'y']);

        assert_eq!(info_log_to_string(&buf), "0:3(1): error: syntax error");
    }

    #[test]
    fn info_log_without_nul() {
        assert_eq!(info_log_to_string(b"link failed"), "link failed");
        assert_eq!(info_log_to_string(&[0; 16]), "");
    }

    #[test]
    fn missing_source_file_names_path() {
        let err = ProgramBuilder::from_paths("does/not/exist.vert", "neither.frag")
            .err()
            .unwrap();

        match err {
            PBError::Io { path, .. } => assert_eq!(path, PathBuf::from("does/not/exist.vert")),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn serials_never_repeat() {
        let first = next_serial();
        let second = next_serial();

        assert_ne!(first, 0);
        assert!(second > first);
    }

    #[test]
    fn error_messages() {
        let err = PBError::Compilation {
            stage: ShaderStage::Fragment,
            log: "bad".into(),
        };
        assert_eq!(err.to_string(), "fragment shader failed to compile: bad");

        let err = PBError::InvalidSource(ShaderStage::Vertex);
        assert_eq!(err.to_string(), "vertex shader source contains a NUL byte");
    }
}
