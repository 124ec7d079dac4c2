/// WGSL shader for textured cubes.
///
/// `projection` and `camera` are uniforms set once per frame. `model` is the
/// per-draw 4x4 model matrix; it arrives as four instance attributes
/// (locations 2..=5, one column each) rather than a uniform, so every draw in
/// a pass can read its own matrix from one buffer. `tex` is sampled at the
/// interpolated texture coordinate.
pub const CUBE_SHADER: &str = r#"
struct Globals {
    projection: mat4x4<f32>,
    camera: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

@group(1) @binding(0)
var tex: texture_2d<f32>;
@group(1) @binding(1)
var tex_sampler: sampler;

struct VertexInput {
    @location(0) vert: vec3<f32>,
    @location(1) vert_tex_coord: vec2<f32>,
};

struct ModelInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) frag_tex_coord: vec2<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: ModelInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );

    var out: VertexOutput;
    out.frag_tex_coord = vertex.vert_tex_coord;
    out.clip_position = globals.projection * globals.camera * model * vec4<f32>(vertex.vert, 1.0);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(tex, tex_sampler, in.frag_tex_coord);
}
"#;
