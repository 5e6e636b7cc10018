//! Enumerated values accepted by the MoteurImmo search API.
//!
//! These are inert data: each enum only exists so the input schema can
//! advertise the accepted values and so malformed values are rejected
//! before a request leaves the process.
//!
//! The lists follow the values the API documents and may lag behind it. A
//! value missing here is refused with an invalid-arguments error without
//! reaching the API, so a new portal, sort key, category or option needs a
//! variant added to the matching enum.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Real estate portals aggregated by MoteurImmo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Portal {
    Leboncoin,
    Seloger,
    Pap,
    Bienici,
    Logicimmo,
    Avendrealouer,
    Paruvendu,
    Figaroimmo,
    Ouestfranceimmo,
    Superimmo,
    Etreproprio,
    Greenacres,
    Orpi,
    Century21,
    Laforet,
    Guyhoquet,
    Stephaneplaza,
    Era,
    Iad,
    Safti,
    Capifrance,
    Foncia,
    Nexity,
    Notaires,
}

impl Portal {
    pub const ALL: [Portal; 24] = [
        Portal::Leboncoin,
        Portal::Seloger,
        Portal::Pap,
        Portal::Bienici,
        Portal::Logicimmo,
        Portal::Avendrealouer,
        Portal::Paruvendu,
        Portal::Figaroimmo,
        Portal::Ouestfranceimmo,
        Portal::Superimmo,
        Portal::Etreproprio,
        Portal::Greenacres,
        Portal::Orpi,
        Portal::Century21,
        Portal::Laforet,
        Portal::Guyhoquet,
        Portal::Stephaneplaza,
        Portal::Era,
        Portal::Iad,
        Portal::Safti,
        Portal::Capifrance,
        Portal::Foncia,
        Portal::Nexity,
        Portal::Notaires,
    ];
}

/// Sort keys, as `<field>-<direction>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SortKey {
    #[serde(rename = "lastEventDate-desc")]
    LastEventDateDesc,
    #[serde(rename = "lastEventDate-asc")]
    LastEventDateAsc,
    #[serde(rename = "creationDate-desc")]
    CreationDateDesc,
    #[serde(rename = "creationDate-asc")]
    CreationDateAsc,
    #[serde(rename = "lastPublicationDate-desc")]
    LastPublicationDateDesc,
    #[serde(rename = "lastPublicationDate-asc")]
    LastPublicationDateAsc,
    #[serde(rename = "lastPriceChangeDate-desc")]
    LastPriceChangeDateDesc,
    #[serde(rename = "lastPriceChangeDate-asc")]
    LastPriceChangeDateAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "pricePerSquareMeter-desc")]
    PricePerSquareMeterDesc,
    #[serde(rename = "pricePerSquareMeter-asc")]
    PricePerSquareMeterAsc,
    #[serde(rename = "surface-desc")]
    SurfaceDesc,
    #[serde(rename = "surface-asc")]
    SurfaceAsc,
    #[serde(rename = "priceDrop-desc")]
    PriceDropDesc,
}

impl SortKey {
    /// Sort order applied by the API when none is given.
    pub const DEFAULT: SortKey = SortKey::LastEventDateDesc;
}

/// Property categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    House,
    Flat,
    Land,
    Parking,
    Premises,
    Office,
    Building,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::House,
        Category::Flat,
        Category::Land,
        Category::Parking,
        Category::Premises,
        Category::Office,
        Category::Building,
        Category::Other,
    ];
}

/// Transaction type of an ad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdType {
    Sale,
    Rental,
}

impl AdType {
    pub const ALL: [AdType; 2] = [AdType::Sale, AdType::Rental];
}

/// Kind of advertiser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PublisherType {
    Professional,
    Individual,
}

impl PublisherType {
    pub const ALL: [PublisherType; 2] = [PublisherType::Professional, PublisherType::Individual];
}

/// DPE energy or gas grade. `V` marks a blank (unassessed) diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    V,
}

/// Property features an ad can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum AdOption {
    HasGarden,
    HasTerrace,
    HasBalcony,
    HasPool,
    HasGarage,
    HasParking,
    HasCellar,
    HasElevator,
    HasFireplace,
    HasAirConditioning,
    HasCaretaker,
    IsFurnished,
    IsNotFurnished,
    IsNew,
    IsOld,
    IsGroundFloor,
    IsLastFloor,
    IsAccessible,
    IsLifeAnnuity,
    IsAuction,
}

/// How multiple keywords are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum KeywordsOperator {
    And,
    Or,
}
