use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

use crate::core::kind::VehicleKind;

/// The company models the factories know how to make.
///
/// Serialized as the lowercase factory key, the same convention as
/// `VehicleKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyModel {
    Saloon,
    Coupe,
    Sport,
    BoxVan,
    Pickup,
}

impl CompanyModel {
    pub const ALL: [CompanyModel; 5] = [
        CompanyModel::Saloon,
        CompanyModel::Coupe,
        CompanyModel::Sport,
        CompanyModel::BoxVan,
        CompanyModel::Pickup,
    ];

    /// The lowercase key a factory selects this model by.
    pub fn key(&self) -> &'static str {
        match self {
            CompanyModel::Saloon => "saloon",
            CompanyModel::Coupe => "coupe",
            CompanyModel::Sport => "sport",
            CompanyModel::BoxVan => "boxvan",
            CompanyModel::Pickup => "pickup",
        }
    }

    pub fn family(&self) -> VehicleKind {
        match self {
            CompanyModel::Saloon | CompanyModel::Coupe | CompanyModel::Sport => VehicleKind::Car,
            CompanyModel::BoxVan | CompanyModel::Pickup => VehicleKind::Van,
        }
    }

    pub fn default_engine(&self) -> &'static str {
        match self {
            CompanyModel::Saloon => "V6",
            CompanyModel::Coupe => "V8",
            CompanyModel::Sport => "V12",
            CompanyModel::BoxVan => "Diesel Inline-4",
            CompanyModel::Pickup => "V8 Turbo",
        }
    }

    pub fn default_colour(&self) -> &'static str {
        match self {
            CompanyModel::Saloon => "Silver",
            CompanyModel::Coupe => "Red",
            CompanyModel::Sport => "Yellow",
            CompanyModel::BoxVan => "White",
            CompanyModel::Pickup => "Black",
        }
    }
}

impl fmt::Display for CompanyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompanyModel::Saloon => "Saloon",
            CompanyModel::Coupe => "Coupe",
            CompanyModel::Sport => "Sport",
            CompanyModel::BoxVan => "BoxVan",
            CompanyModel::Pickup => "Pickup",
        };
        f.write_str(name)
    }
}

/// The `Paintable` trait is the one capability every company vehicle shares.
///
/// Each model implements it on its own; there is no base vehicle to inherit
/// from. Engine and colour start at the model's defaults and can be changed
/// freely afterwards. Painting only reports the current colour.
pub trait Paintable: fmt::Debug {
    fn model(&self) -> CompanyModel;

    fn family(&self) -> VehicleKind {
        self.model().family()
    }

    fn engine(&self) -> &str;
    fn colour(&self) -> &str;
    fn set_engine(&mut self, engine: String);
    fn set_colour(&mut self, colour: String);

    /// Writes the model's paint line to `out`.
    fn paint_to(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Paints to standard output.
    fn paint(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.paint_to(&mut handle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saloon {
    pub engine: String,
    pub colour: String,
}

impl Saloon {
    pub fn new() -> Self {
        Self {
            engine: CompanyModel::Saloon.default_engine().to_string(),
            colour: CompanyModel::Saloon.default_colour().to_string(),
        }
    }
}

impl Default for Saloon {
    fn default() -> Self {
        Self::new()
    }
}

impl Paintable for Saloon {
    fn model(&self) -> CompanyModel {
        CompanyModel::Saloon
    }

    fn engine(&self) -> &str {
        &self.engine
    }

    fn colour(&self) -> &str {
        &self.colour
    }

    fn set_engine(&mut self, engine: String) {
        self.engine = engine;
    }

    fn set_colour(&mut self, colour: String) {
        self.colour = colour;
    }

    fn paint_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Painting the Saloon {}", self.colour)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupe {
    pub engine: String,
    pub colour: String,
}

impl Coupe {
    pub fn new() -> Self {
        Self {
            engine: CompanyModel::Coupe.default_engine().to_string(),
            colour: CompanyModel::Coupe.default_colour().to_string(),
        }
    }
}

impl Default for Coupe {
    fn default() -> Self {
        Self::new()
    }
}

impl Paintable for Coupe {
    fn model(&self) -> CompanyModel {
        CompanyModel::Coupe
    }

    fn engine(&self) -> &str {
        &self.engine
    }

    fn colour(&self) -> &str {
        &self.colour
    }

    fn set_engine(&mut self, engine: String) {
        self.engine = engine;
    }

    fn set_colour(&mut self, colour: String) {
        self.colour = colour;
    }

    fn paint_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Painting the Coupe {}", self.colour)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sport {
    pub engine: String,
    pub colour: String,
}

impl Sport {
    pub fn new() -> Self {
        Self {
            engine: CompanyModel::Sport.default_engine().to_string(),
            colour: CompanyModel::Sport.default_colour().to_string(),
        }
    }
}

impl Default for Sport {
    fn default() -> Self {
        Self::new()
    }
}

impl Paintable for Sport {
    fn model(&self) -> CompanyModel {
        CompanyModel::Sport
    }

    fn engine(&self) -> &str {
        &self.engine
    }

    fn colour(&self) -> &str {
        &self.colour
    }

    fn set_engine(&mut self, engine: String) {
        self.engine = engine;
    }

    fn set_colour(&mut self, colour: String) {
        self.colour = colour;
    }

    fn paint_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Painting the Sport car {}", self.colour)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxVan {
    pub engine: String,
    pub colour: String,
}

impl BoxVan {
    pub fn new() -> Self {
        Self {
            engine: CompanyModel::BoxVan.default_engine().to_string(),
            colour: CompanyModel::BoxVan.default_colour().to_string(),
        }
    }
}

impl Default for BoxVan {
    fn default() -> Self {
        Self::new()
    }
}

impl Paintable for BoxVan {
    fn model(&self) -> CompanyModel {
        CompanyModel::BoxVan
    }

    fn engine(&self) -> &str {
        &self.engine
    }

    fn colour(&self) -> &str {
        &self.colour
    }

    fn set_engine(&mut self, engine: String) {
        self.engine = engine;
    }

    fn set_colour(&mut self, colour: String) {
        self.colour = colour;
    }

    fn paint_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Painting the Box Van {}", self.colour)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pickup {
    pub engine: String,
    pub colour: String,
}

impl Pickup {
    pub fn new() -> Self {
        Self {
            engine: CompanyModel::Pickup.default_engine().to_string(),
            colour: CompanyModel::Pickup.default_colour().to_string(),
        }
    }
}

impl Default for Pickup {
    fn default() -> Self {
        Self::new()
    }
}

impl Paintable for Pickup {
    fn model(&self) -> CompanyModel {
        CompanyModel::Pickup
    }

    fn engine(&self) -> &str {
        &self.engine
    }

    fn colour(&self) -> &str {
        &self.colour
    }

    fn set_engine(&mut self, engine: String) {
        self.engine = engine;
    }

    fn set_colour(&mut self, colour: String) {
        self.colour = colour;
    }

    fn paint_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Painting the Pickup {}", self.colour)
    }
}

/// One fresh instance of every company model, in `CompanyModel::ALL` order.
pub fn showroom() -> Vec<Box<dyn Paintable>> {
    vec![
        Box::new(Saloon::new()),
        Box::new(Coupe::new()),
        Box::new(Sport::new()),
        Box::new(BoxVan::new()),
        Box::new(Pickup::new()),
    ]
}
