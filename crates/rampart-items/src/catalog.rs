//! Static item catalog.

use phf::phf_map;

/// Ward-capable item ids, in the order ward lookups prefer them.
pub const WARD_ITEM_IDS: [u32; 8] = [3340, 3350, 3361, 3154, 2045, 2049, 2050, 2044];

/// Display names for the items the toolkit knows about.
pub static ITEM_NAMES: phf::Map<u32, &'static str> = phf_map! {
    // Wards and trinkets.
    3340u32 => "Warding Totem",
    3350u32 => "Greater Totem",
    3361u32 => "Greater Stealth Totem",
    3362u32 => "Greater Vision Totem",
    3154u32 => "Wriggle's Lantern",
    2049u32 => "Sightstone",
    2045u32 => "Ruby Sightstone",
    2044u32 => "Stealth Ward",
    2050u32 => "Explorer's Ward",
    // Actives.
    3140u32 => "Quicksilver Sash",
    3139u32 => "Mercurial Scimitar",
    3153u32 => "Blade of the Ruined King",
    3144u32 => "Bilgewater Cutlass",
    3142u32 => "Youmuu's Ghostblade",
    3128u32 => "Deathfire Grasp",
    3157u32 => "Zhonya's Hourglass",
    3190u32 => "Locket of the Iron Solari",
    3143u32 => "Randuin's Omen",
    3074u32 => "Ravenous Hydra",
    3077u32 => "Tiamat",
    // Consumables.
    2003u32 => "Health Potion",
    2004u32 => "Mana Potion",
};

/// Display name for an item id, if the catalog knows it.
pub fn item_name(id: u32) -> Option<&'static str> {
    ITEM_NAMES.get(&id).copied()
}

/// Item id for an exact display name, if the catalog knows it.
pub fn item_id_by_name(name: &str) -> Option<u32> {
    ITEM_NAMES
        .entries()
        .find_map(|(id, item_name)| if *item_name == name { Some(*id) } else { None })
}
