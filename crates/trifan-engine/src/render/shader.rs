use std::path::Path;

use super::RenderError;

/// Pipeline stage a shader entry point is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn attribute(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "@vertex",
            ShaderStage::Fragment => "@fragment",
        }
    }
}

/// Name of the first function tagged with `stage`'s attribute, if any.
///
/// Line comments are skipped; block comments are not.
pub fn find_entry_point(source: &str, stage: ShaderStage) -> Option<String> {
    let attr = stage.attribute();
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';

    let mut code = String::with_capacity(source.len());
    for line in source.lines() {
        code.push_str(line.split("//").next().unwrap_or(""));
        code.push('\n');
    }

    let mut rest = code.as_str();
    while let Some(at) = rest.find(attr) {
        rest = &rest[at + attr.len()..];
        if rest.starts_with(is_ident) {
            continue;
        }
        let Some(after_fn) = rest.trim_start().strip_prefix("fn") else { continue };
        if !after_fn.starts_with(char::is_whitespace) {
            continue;
        }
        let name: String = after_fn.trim_start().chars().take_while(|&c| is_ident(c)).collect();
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

/// A WGSL module bound to one entry point of one stage.
#[derive(Debug)]
pub struct Shader {
    module: wgpu::ShaderModule,
    stage: ShaderStage,
    entry_point: String,
    label: String,
}

impl Shader {
    /// Compiles `source`, resolving the entry point for `stage`.
    pub fn from_wgsl(
        device: &wgpu::Device,
        label: &str,
        source: &str,
        stage: ShaderStage,
    ) -> Result<Self, RenderError> {
        let entry_point = find_entry_point(source, stage).ok_or_else(|| {
            RenderError::resource(
                format!("shader '{label}'"),
                format!("no {} entry point", stage.attribute()),
            )
        })?;

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        log::debug!("compiled {stage:?} shader '{label}' (entry point `{entry_point}`)");

        Ok(Self {
            module,
            stage,
            entry_point,
            label: label.to_string(),
        })
    }

    /// Reads a WGSL file and compiles it for `stage`.
    pub fn from_file(
        device: &wgpu::Device,
        path: &Path,
        stage: ShaderStage,
    ) -> Result<Self, RenderError> {
        let label = path.display().to_string();
        let source = std::fs::read_to_string(path)
            .map_err(|e| RenderError::resource(format!("shader '{label}'"), e.to_string()))?;
        Self::from_wgsl(device, &label, &source, stage)
    }

    #[inline]
    pub fn module(&self) -> &wgpu::ShaderModule {
        &self.module
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    #[inline]
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORED: &str = include_str!("shaders/colored.wgsl");
    const FLAT: &str = include_str!("shaders/flat.wgsl");

    #[test]
    fn bundled_shaders_declare_both_stages() {
        for src in [COLORED, FLAT] {
            assert_eq!(find_entry_point(src, ShaderStage::Vertex).as_deref(), Some("vs_main"));
            assert_eq!(find_entry_point(src, ShaderStage::Fragment).as_deref(), Some("fs_main"));
        }
    }

    #[test]
    fn attribute_on_separate_line() {
        let src = "@vertex\nfn  main_vs(@location(0) p: vec3<f32>) -> @builtin(position) vec4<f32> {}";
        assert_eq!(find_entry_point(src, ShaderStage::Vertex).as_deref(), Some("main_vs"));
        assert_eq!(find_entry_point(src, ShaderStage::Fragment), None);
    }

    #[test]
    fn commented_out_entry_point_is_ignored() {
        let src = "// @fragment fn old() {}\n@fragment fn new_fs() {}";
        assert_eq!(find_entry_point(src, ShaderStage::Fragment).as_deref(), Some("new_fs"));
    }

    #[test]
    fn longer_attribute_names_do_not_match() {
        let src = "@vertex_like fn nope() {}";
        assert_eq!(find_entry_point(src, ShaderStage::Vertex), None);
    }

    #[test]
    fn missing_function_name() {
        assert_eq!(find_entry_point("@vertex fn", ShaderStage::Vertex), None);
        assert_eq!(find_entry_point("@vertex function x() {}", ShaderStage::Vertex), None);
    }
}
