//! Static reference data: federal districts, the regions they contain, and
//! the city-name alias table used by search.
//!
//! Region and district codes share one namespace; upstream records assign
//! representatives to either granularity, so the registry refuses a code that
//! is both a region and a district.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use serde::Serialize;

use crate::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// ISO 3166-2 style code, e.g. `"RU-MOW"`.
    pub id: String,
    pub name: String,
    /// Code of the parent [`FederalDistrict`], e.g. `"ЦФО"`.
    pub district_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FederalDistrict {
    /// Abbreviation, e.g. `"ЦФО"`. Also matched by search.
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityAlias {
    /// Lowercase city name.
    pub city: String,
    pub region_id: String,
}

#[derive(Debug)]
pub struct RegionRegistry {
    regions: Vec<Region>,
    districts: Vec<FederalDistrict>,
    aliases: Vec<CityAlias>,
    region_index: HashMap<String, usize>,
    district_index: HashMap<String, usize>,
}

const FEDERAL_DISTRICTS: &[(&str, &str)] = &[
    ("ЦФО", "Центральный федеральный округ"),
    ("СЗФО", "Северо-Западный федеральный округ"),
    ("ЮФО", "Южный федеральный округ"),
    ("СКФО", "Северо-Кавказский федеральный округ"),
    ("ПФО", "Приволжский федеральный округ"),
    ("УФО", "Уральский федеральный округ"),
    ("СФО", "Сибирский федеральный округ"),
    ("ДФО", "Дальневосточный федеральный округ"),
];

const RUSSIA_REGIONS: &[(&str, &str, &str)] = &[
    ("RU-BEL", "Белгородская область", "ЦФО"),
    ("RU-BRY", "Брянская область", "ЦФО"),
    ("RU-VLA", "Владимирская область", "ЦФО"),
    ("RU-VOR", "Воронежская область", "ЦФО"),
    ("RU-IVA", "Ивановская область", "ЦФО"),
    ("RU-KLU", "Калужская область", "ЦФО"),
    ("RU-KOS", "Костромская область", "ЦФО"),
    ("RU-KRS", "Курская область", "ЦФО"),
    ("RU-LIP", "Липецкая область", "ЦФО"),
    ("RU-MOW", "Москва", "ЦФО"),
    ("RU-MOS", "Московская область", "ЦФО"),
    ("RU-ORL", "Орловская область", "ЦФО"),
    ("RU-RYA", "Рязанская область", "ЦФО"),
    ("RU-SMO", "Смоленская область", "ЦФО"),
    ("RU-TAM", "Тамбовская область", "ЦФО"),
    ("RU-TVE", "Тверская область", "ЦФО"),
    ("RU-TUL", "Тульская область", "ЦФО"),
    ("RU-YAR", "Ярославская область", "ЦФО"),
    ("RU-KR", "Республика Карелия", "СЗФО"),
    ("RU-KO", "Республика Коми", "СЗФО"),
    ("RU-ARK", "Архангельская область", "СЗФО"),
    ("RU-NEN", "Ненецкий автономный округ", "СЗФО"),
    ("RU-VLG", "Вологодская область", "СЗФО"),
    ("RU-KGD", "Калининградская область", "СЗФО"),
    ("RU-SPE", "Санкт-Петербург", "СЗФО"),
    ("RU-LEN", "Ленинградская область", "СЗФО"),
    ("RU-MUR", "Мурманская область", "СЗФО"),
    ("RU-NGR", "Новгородская область", "СЗФО"),
    ("RU-PSK", "Псковская область", "СЗФО"),
    ("RU-AD", "Республика Адыгея", "ЮФО"),
    ("RU-KL", "Республика Калмыкия", "ЮФО"),
    ("RU-CR", "Республика Крым", "ЮФО"),
    ("RU-KDA", "Краснодарский край", "ЮФО"),
    ("RU-AST", "Астраханская область", "ЮФО"),
    ("RU-VGG", "Волгоградская область", "ЮФО"),
    ("RU-ROS", "Ростовская область", "ЮФО"),
    ("RU-SEV", "Севастополь", "ЮФО"),
    ("RU-DA", "Республика Дагестан", "СКФО"),
    ("RU-IN", "Республика Ингушетия", "СКФО"),
    ("RU-KB", "Кабардино-Балкарская Республика", "СКФО"),
    ("RU-KC", "Карачаево-Черкесская Республика", "СКФО"),
    ("RU-SE", "Республика Северная Осетия — Алания", "СКФО"),
    ("RU-CE", "Чеченская Республика", "СКФО"),
    ("RU-STA", "Ставропольский край", "СКФО"),
    ("RU-BA", "Республика Башкортостан", "ПФО"),
    ("RU-ME", "Республика Марий Эл", "ПФО"),
    ("RU-MO", "Республика Мордовия", "ПФО"),
    ("RU-TA", "Республика Татарстан", "ПФО"),
    ("RU-UD", "Удмуртская Республика", "ПФО"),
    ("RU-CU", "Чувашская Республика", "ПФО"),
    ("RU-PER", "Пермский край", "ПФО"),
    ("RU-KIR", "Кировская область", "ПФО"),
    ("RU-NIZ", "Нижегородская область", "ПФО"),
    ("RU-ORE", "Оренбургская область", "ПФО"),
    ("RU-PNZ", "Пензенская область", "ПФО"),
    ("RU-SAM", "Самарская область", "ПФО"),
    ("RU-SAR", "Саратовская область", "ПФО"),
    ("RU-ULY", "Ульяновская область", "ПФО"),
    ("RU-KGN", "Курганская область", "УФО"),
    ("RU-SVE", "Свердловская область", "УФО"),
    ("RU-TYU", "Тюменская область", "УФО"),
    ("RU-KHM", "Ханты-Мансийский автономный округ — Югра", "УФО"),
    ("RU-CHE", "Челябинская область", "УФО"),
    ("RU-YAN", "Ямало-Ненецкий автономный округ", "УФО"),
    ("RU-AL", "Республика Алтай", "СФО"),
    ("RU-TY", "Республика Тыва", "СФО"),
    ("RU-KK", "Республика Хакасия", "СФО"),
    ("RU-ALT", "Алтайский край", "СФО"),
    ("RU-KYA", "Красноярский край", "СФО"),
    ("RU-IRK", "Иркутская область", "СФО"),
    ("RU-KEM", "Кемеровская область", "СФО"),
    ("RU-NVS", "Новосибирская область", "СФО"),
    ("RU-OMS", "Омская область", "СФО"),
    ("RU-TOM", "Томская область", "СФО"),
    ("RU-BU", "Республика Бурятия", "ДФО"),
    ("RU-SA", "Республика Саха (Якутия)", "ДФО"),
    ("RU-ZAB", "Забайкальский край", "ДФО"),
    ("RU-KAM", "Камчатский край", "ДФО"),
    ("RU-PRI", "Приморский край", "ДФО"),
    ("RU-KHA", "Хабаровский край", "ДФО"),
    ("RU-AMU", "Амурская область", "ДФО"),
    ("RU-MAG", "Магаданская область", "ДФО"),
    ("RU-SAK", "Сахалинская область", "ДФО"),
    ("RU-YEV", "Еврейская автономная область", "ДФО"),
    ("RU-CHU", "Чукотский автономный округ", "ДФО"),
];

// Regional centres and large cities whose names do not appear in the name of
// their region.
const CITY_ALIASES: &[(&str, &str)] = &[
    ("санкт-петербург", "RU-SPE"),
    ("петербург", "RU-SPE"),
    ("спб", "RU-SPE"),
    ("екатеринбург", "RU-SVE"),
    ("новосибирск", "RU-NVS"),
    ("казань", "RU-TA"),
    ("нижний новгород", "RU-NIZ"),
    ("челябинск", "RU-CHE"),
    ("магнитогорск", "RU-CHE"),
    ("самара", "RU-SAM"),
    ("тольятти", "RU-SAM"),
    ("уфа", "RU-BA"),
    ("ростов-на-дону", "RU-ROS"),
    ("краснодар", "RU-KDA"),
    ("сочи", "RU-KDA"),
    ("омск", "RU-OMS"),
    ("воронеж", "RU-VOR"),
    ("пермь", "RU-PER"),
    ("волгоград", "RU-VGG"),
    ("красноярск", "RU-KYA"),
    ("саратов", "RU-SAR"),
    ("тюмень", "RU-TYU"),
    ("ижевск", "RU-UD"),
    ("барнаул", "RU-ALT"),
    ("иркутск", "RU-IRK"),
    ("хабаровск", "RU-KHA"),
    ("владивосток", "RU-PRI"),
    ("ярославль", "RU-YAR"),
    ("махачкала", "RU-DA"),
    ("томск", "RU-TOM"),
    ("оренбург", "RU-ORE"),
    ("кемерово", "RU-KEM"),
    ("новокузнецк", "RU-KEM"),
    ("рязань", "RU-RYA"),
    ("астрахань", "RU-AST"),
    ("пенза", "RU-PNZ"),
    ("липецк", "RU-LIP"),
    ("киров", "RU-KIR"),
    ("чебоксары", "RU-CU"),
    ("калининград", "RU-KGD"),
    ("тула", "RU-TUL"),
    ("курск", "RU-KRS"),
    ("ставрополь", "RU-STA"),
    ("тверь", "RU-TVE"),
    ("брянск", "RU-BRY"),
    ("белгород", "RU-BEL"),
    ("архангельск", "RU-ARK"),
    ("владимир", "RU-VLA"),
    ("симферополь", "RU-CR"),
    ("мурманск", "RU-MUR"),
    ("якутск", "RU-SA"),
    ("петрозаводск", "RU-KR"),
    ("сыктывкар", "RU-KO"),
    ("улан-удэ", "RU-BU"),
    ("чита", "RU-ZAB"),
    ("сургут", "RU-KHM"),
    ("ханты-мансийск", "RU-KHM"),
    ("салехард", "RU-YAN"),
    ("грозный", "RU-CE"),
    ("владикавказ", "RU-SE"),
    ("нальчик", "RU-KB"),
    ("майкоп", "RU-AD"),
    ("элиста", "RU-KL"),
    ("йошкар-ола", "RU-ME"),
    ("саранск", "RU-MO"),
    ("южно-сахалинск", "RU-SAK"),
    ("петропавловск-камчатский", "RU-KAM"),
    ("благовещенск", "RU-AMU"),
    ("абакан", "RU-KK"),
    ("кызыл", "RU-TY"),
    ("горно-алтайск", "RU-AL"),
    ("биробиджан", "RU-YEV"),
    ("анадырь", "RU-CHU"),
    ("нарьян-мар", "RU-NEN"),
];

static RUSSIA: LazyLock<RegionRegistry> = LazyLock::new(|| {
    let regions = RUSSIA_REGIONS
        .iter()
        .map(|&(id, name, district_id)| Region {
            id: id.to_owned(),
            name: name.to_owned(),
            district_id: district_id.to_owned(),
        })
        .collect();
    let districts = FEDERAL_DISTRICTS
        .iter()
        .map(|&(id, name)| FederalDistrict {
            id: id.to_owned(),
            name: name.to_owned(),
        })
        .collect();
    let aliases = CITY_ALIASES
        .iter()
        .map(|&(city, region_id)| CityAlias {
            city: city.to_owned(),
            region_id: region_id.to_owned(),
        })
        .collect();
    RegionRegistry::build(regions, districts, aliases)
});

impl RegionRegistry {
    /// The built-in registry of Russian federal districts and subjects.
    #[must_use]
    pub fn russia() -> &'static RegionRegistry {
        &RUSSIA
    }

    /// Builds a registry from custom reference data.
    ///
    /// City alias names are lowercased on the way in.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if ids collide, a region points at an unknown
    /// district, or an alias targets an unknown region.
    pub fn new(
        regions: Vec<Region>,
        districts: Vec<FederalDistrict>,
        aliases: Vec<CityAlias>,
    ) -> Result<Self, RegistryError> {
        let mut district_ids = HashSet::new();
        for district in &districts {
            if !district_ids.insert(district.id.as_str()) {
                return Err(RegistryError::DuplicateDistrict(district.id.clone()));
            }
        }

        let mut region_ids = HashSet::new();
        for region in &regions {
            if !region_ids.insert(region.id.as_str()) {
                return Err(RegistryError::DuplicateRegion(region.id.clone()));
            }
            if district_ids.contains(region.id.as_str()) {
                return Err(RegistryError::AmbiguousCode(region.id.clone()));
            }
            if !district_ids.contains(region.district_id.as_str()) {
                return Err(RegistryError::UnknownDistrict {
                    region: region.id.clone(),
                    district: region.district_id.clone(),
                });
            }
        }

        for alias in &aliases {
            if !region_ids.contains(alias.region_id.as_str()) {
                return Err(RegistryError::UnknownAliasTarget {
                    city: alias.city.clone(),
                    region: alias.region_id.clone(),
                });
            }
        }

        let aliases = aliases
            .into_iter()
            .map(|alias| CityAlias {
                city: alias.city.to_lowercase(),
                region_id: alias.region_id,
            })
            .collect();

        Ok(Self::build(regions, districts, aliases))
    }

    fn build(
        regions: Vec<Region>,
        districts: Vec<FederalDistrict>,
        aliases: Vec<CityAlias>,
    ) -> Self {
        let region_index = regions
            .iter()
            .enumerate()
            .map(|(idx, region)| (region.id.clone(), idx))
            .collect();
        let district_index = districts
            .iter()
            .enumerate()
            .map(|(idx, district)| (district.id.clone(), idx))
            .collect();
        Self {
            regions,
            districts,
            aliases,
            region_index,
            district_index,
        }
    }

    /// All regions, in registry order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[must_use]
    pub fn districts(&self) -> &[FederalDistrict] {
        &self.districts
    }

    #[must_use]
    pub fn city_aliases(&self) -> &[CityAlias] {
        &self.aliases
    }

    #[must_use]
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.region_index.get(id).map(|&idx| &self.regions[idx])
    }

    #[must_use]
    pub fn district(&self, id: &str) -> Option<&FederalDistrict> {
        self.district_index.get(id).map(|&idx| &self.districts[idx])
    }

    /// Returns `true` if `code` is either a region or a district id.
    #[must_use]
    pub fn is_known(&self, code: &str) -> bool {
        self.region_index.contains_key(code) || self.district_index.contains_key(code)
    }
}
