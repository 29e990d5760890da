use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WashPackage {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailingPackage {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct InteriorService {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub dates: &'static [&'static str],
    pub time_slots: &'static [&'static str],
    pub car_wash: &'static [WashPackage],
    pub exterior_detailing: &'static [DetailingPackage],
    pub interior_cleaning: &'static [InteriorService],
}
