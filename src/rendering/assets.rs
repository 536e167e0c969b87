use bevy::prelude::*;

/// Sprite sheet cell of the player texture.
pub const PLAYER_FRAME_SIZE: UVec2 = UVec2::new(32, 48);
pub const PLAYER_FRAME_COUNT: u32 = 9;

/// Texture handles requested by the preload step.
#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub sky: Handle<Image>,
    pub ground: Handle<Image>,
    pub star: Handle<Image>,
    pub bomb: Handle<Image>,
    pub reset_button: Handle<Image>,
    pub player: Handle<Image>,
    pub player_layout: Handle<TextureAtlasLayout>,
}

impl GameAssets {
    pub fn load(asset_server: &AssetServer, layouts: &mut Assets<TextureAtlasLayout>) -> Self {
        let layout = TextureAtlasLayout::from_grid(PLAYER_FRAME_SIZE, PLAYER_FRAME_COUNT, 1, None, None);
        Self {
            sky: asset_server.load("textures/sky.png"),
            ground: asset_server.load("textures/platform.png"),
            star: asset_server.load("textures/star.png"),
            bomb: asset_server.load("textures/bomb.png"),
            reset_button: asset_server.load("textures/reset.png"),
            player: asset_server.load("textures/dude.png"),
            player_layout: layouts.add(layout),
        }
    }
}
