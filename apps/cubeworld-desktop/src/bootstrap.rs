use cubeworld_assets::{AssetError, AssetRoot};
use cubeworld_common::{MeshHandle, TextureHandle};
use cubeworld_input::Direction;
use cubeworld_kernel::{FollowCamera, Map, Player, Simulation};
use rand::Rng;
use std::path::PathBuf;
use winit::keyboard::KeyCode;

/// Texture shared by the player and every map block.
pub const TEXTURE_NAME: &str = "square.png";

/// Directories searched for assets, in order.
pub fn asset_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")];
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
    {
        candidates.push(exe_dir.join("assets"));
    }
    candidates.push(PathBuf::from("assets"));
    candidates
}

pub fn locate_assets() -> Result<AssetRoot, AssetError> {
    AssetRoot::discover(asset_candidates())
}

/// Assemble the initial state from already-uploaded GPU handles.
pub fn build_simulation<R: Rng>(
    player_mesh: MeshHandle,
    map_mesh: MeshHandle,
    texture: TextureHandle,
    rng: &mut R,
) -> Simulation {
    Simulation::new(
        Player::new(player_mesh, texture),
        FollowCamera::default(),
        Map::generate(map_mesh, texture, rng),
    )
}

/// Arrow keys drive the player.
pub fn direction_for(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::ArrowDown => Some(Direction::Down),
        KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}
