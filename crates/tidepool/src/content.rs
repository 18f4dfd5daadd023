//! Embedded sample content: fish species, grouped by habitat.
//!
//! The catalog is reconstructed identically on every process start from the
//! constant data below. Item keys are prefixed with the tile size used in
//! the overview grid, and every item references an asset-relative image path
//! that the presentation layer resolves lazily.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::model::{Group, Item};

struct ItemSpec {
    unique_id: &'static str,
    title: &'static str,
    image_path: &'static str,
    content: &'static str,
    col_span: u32,
    row_span: u32,
}

struct GroupSpec {
    unique_id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    items: &'static [ItemSpec],
}

const GROUPS: &[GroupSpec] = &[
    GroupSpec {
        unique_id: "Group-1",
        title: "FreshWater Fish",
        subtitle: "Rivers, lakes and streams",
        description: "Species that spend all or most of their lives in fresh water, \
            from slow backwaters to fast-flowing mountain streams.",
        items: &[
            ItemSpec {
                unique_id: "Small-Group-1-Item1",
                title: "Puffer Fish",
                image_path: "Assets/HubPage/HubpageImage2.png",
                content: "The puffer fish is one of the most interesting and unusual species \
                    of fish with several unique characteristics to its credit. When it feels \
                    threatened, it puffs up to double its size by swallowing water or air. \
                    There is little questioning the fact that the puffer fish is widely known \
                    for its ability to inflate itself, but one has to understand that this is \
                    an adaptation which compensates their inability to swim fast. Not to \
                    forget, some puffer fish species have tiny spines which only become \
                    visible when they inflate themselves.",
                col_span: 35,
                row_span: 35,
            },
            ItemSpec {
                unique_id: "Small-Group-1-Item2",
                title: "Piranha",
                image_path: "Assets/HubPage/HubpageImage3.png",
                content: "Piranhas are normally about 14 to 26 cm long (5.5 to 10.25 inches), \
                    although some specimens have been reported to be up to 43 cm (17.0 inches) \
                    in length. All piranhas have a single row of sharp teeth in both jaws; the \
                    teeth are tightly packed and interlocking and are used for rapid puncture \
                    and shearing. Individual teeth are typically broadly triangular, pointed \
                    and blade-like, with minor variation in the number of cusps.",
                col_span: 35,
                row_span: 35,
            },
            ItemSpec {
                unique_id: "Small-Group-1-Item3",
                title: "Green Swordtail",
                image_path: "Assets/HubPage/HubpageImage4.png",
                content: "The green swordtail (Xiphophorus hellerii) is a species of \
                    freshwater fish in family Poeciliidae of order Cyprinodontiformes. A \
                    live-bearer, it is closely related to the southern platyfish and can \
                    crossbreed with it. The male grows to a maximum overall length of 14 cm; \
                    the name swordtail is derived from the elongated lower lobe of the male's \
                    caudal fin. The wild form is olive green in color, with a red or brown \
                    lateral stripe. It prefers swift-flowing, heavily-vegetated rivers and \
                    streams, but is also found in warm springs and canals.",
                col_span: 35,
                row_span: 35,
            },
            ItemSpec {
                unique_id: "Big-Group-1-Item4",
                title: "Archerfish",
                image_path: "Assets/HubPage/HubpageImage5.png",
                content: "The archerfish are a family (Toxotidae) of fish known for their \
                    habit of preying on land-based insects and other small animals by \
                    literally shooting them down with water droplets from their specialized \
                    mouths. The family is small, consisting of seven species in the genus \
                    Toxotes, which typically inhabit brackish waters of estuaries and \
                    mangroves but can also be found in the open ocean as well as far upstream \
                    in fresh water. Archerfish bodies are deep and laterally compressed; sizes \
                    are generally small, about 5 to 10 cm, but Toxotes chatareus can reach 40 \
                    centimetres.",
                col_span: 69,
                row_span: 70,
            },
            ItemSpec {
                unique_id: "Landscape-Group-1-Item5",
                title: "Cichlid",
                image_path: "Assets/HubPage/HubpageImage6.png",
                content: "Cichlids are fish from the family Cichlidae in the order \
                    Perciformes. This family is both large and diverse: at least 1,650 \
                    species have been scientifically described, making it one of the largest \
                    vertebrate families. New species are discovered annually, and many \
                    species remain undescribed, with estimates varying between 2,000 and \
                    3,000. Cichlids are among the most popular freshwater fish kept in the \
                    home aquarium.",
                col_span: 69,
                row_span: 35,
            },
        ],
    },
    GroupSpec {
        unique_id: "Group-2",
        title: "Marine Fish",
        subtitle: "Reefs and open sea",
        description: "Salt-water species of coral reefs and coastal waters, many of \
            them brightly colored and popular in public aquaria.",
        items: &[
            ItemSpec {
                unique_id: "Big-Group-2-Item1",
                title: "Banggai cardinalfish",
                image_path: "Assets/HubPage/HubpageImage7.png",
                content: "This species grows up to 8 centimetres (3 in) total length. It has \
                    a distinctive contrasting pattern of black and light bars with white \
                    spots, and is easily differentiated from all other cardinalfish by its \
                    tasseled first dorsal fin, elongate anal and second dorsal fin rays, \
                    deeply forked caudal fin, and color pattern consisting of three black \
                    bars across the head and body. Males can be differentiated from females \
                    by a conspicuous enlarged oral cavity, which is apparent only when they \
                    are brooding.",
                col_span: 69,
                row_span: 70,
            },
            ItemSpec {
                unique_id: "Landscape-Group-2-Item2",
                title: "Acanthuridae",
                image_path: "Assets/HubPage/HubpageImage8.png",
                content: "Acanthuridae is the family of surgeonfishes, tangs, and \
                    unicornfishes. The family is composed of marine fish living in tropical \
                    seas, usually around coral reefs. The distinctive characteristic of the \
                    family is the scalpel-like spines, one or more on either side of the \
                    tail, which are dangerously sharp. Most species are relatively small, \
                    with a maximum length of 15 to 40 cm, but the whitemargin unicornfish, \
                    the largest species in the family, reaches a length of up to 1 metre.",
                col_span: 69,
                row_span: 35,
            },
            ItemSpec {
                unique_id: "Medium-Group-2-Item3",
                title: "Yellow Tang",
                image_path: "Assets/HubPage/HubpageImage9.png",
                content: "The yellow tang (Zebrasoma flavescens) reaches a diameter of \
                    nearly 8 inches in the sea; aquarium specimens seldom exceed 6 inches. \
                    In the reef aquarium, the yellow tang earns its keep by grazing on \
                    filamentous algae, helping to keep the rocks free of excessive growth. \
                    Yellow tangs are found in much of the Pacific, occurring from Japan to \
                    Hawaii north of the equator, typically on outer reefs with dense coral \
                    stands in water depths from about 10 feet to more than 100 feet.",
                col_span: 41,
                row_span: 41,
            },
            ItemSpec {
                unique_id: "Medium-Group-2-Item4",
                title: "Hawkfish",
                image_path: "Assets/HubPage/HubpageImage09.png",
                content: "The hawkfishes are strictly tropical, perciform marine fishes of \
                    the family Cirrhitidae. Associated with the coral reefs of the western \
                    and eastern Atlantic and Indo-Pacific, the hawkfish family contains 12 \
                    genera and 32 species. They have large heads with thick, somewhat \
                    elongated bodies; at the tip of each dorsal spine are several trailing \
                    filaments, hence the family name, from the Latin cirrus meaning fringe. \
                    The vibrant colours exhibited by most hawkfishes have won them \
                    popularity in the aquaria hobby.",
                col_span: 41,
                row_span: 41,
            },
        ],
    },
    GroupSpec {
        unique_id: "Group-3",
        title: "Migrating Fish",
        subtitle: "Long-distance travellers",
        description: "Wide-ranging species that cross oceans or move between salt and \
            fresh water over their life cycle.",
        items: &[
            ItemSpec {
                unique_id: "Big-Group-3-Item1",
                title: "Tuna",
                image_path: "Assets/HubPage/HubpageImage10.png",
                content: "A tuna is a saltwater finfish that belongs to the tribe Thunnini, \
                    a sub-grouping of the mackerel family. Thunnini comprises fifteen \
                    species across five genera, the sizes of which vary greatly, ranging \
                    from the bullet tuna up to the Atlantic bluefin tuna, which averages 2 m \
                    and is believed to live for up to 50 years. Their circulatory and \
                    respiratory systems are unique among fish, enabling them to maintain a \
                    body temperature higher than the surrounding water. An active and agile \
                    predator, the yellowfin tuna is capable of speeds of up to 75 km/h.",
                col_span: 69,
                row_span: 70,
            },
            ItemSpec {
                unique_id: "Landscape-Group-3-Item2",
                title: "Dolphin",
                image_path: "Assets/HubPage/HubpageImage11.png",
                content: "Dolphins are marine mammals closely related to whales and \
                    porpoises. There are almost forty species of dolphin in 17 genera. They \
                    vary in size from 1.2 m and 40 kg (Maui's dolphin) up to 9.5 m and 10 \
                    tonnes (the orca). They are found worldwide, mostly in the shallower \
                    seas of the continental shelves, and are carnivores, eating mostly fish \
                    and squid. Dolphins are among the most intelligent animals, and their \
                    often friendly appearance and seemingly playful attitude have made them \
                    very popular in human culture.",
                col_span: 69,
                row_span: 35,
            },
            ItemSpec {
                unique_id: "Medium-Group-3-Item3",
                title: "Bullshark",
                image_path: "Assets/HubPage/HubpageImage12.png",
                content: "The bull shark, Carcharhinus leucas, also known as the Zambezi \
                    shark, is a shark commonly found worldwide in warm, shallow waters along \
                    coasts and in rivers. The bull shark is known for its aggressive nature, \
                    predilection for warm shallow water, and presence in brackish and \
                    freshwater systems including estuaries and rivers. It can thrive in both \
                    saltwater and freshwater and can travel far up rivers; bull sharks have \
                    even been known to travel as far up as Kentucky in the Ohio River.",
                col_span: 41,
                row_span: 41,
            },
            ItemSpec {
                unique_id: "Medium-Group-3-Item4",
                title: "Trout",
                image_path: "Assets/HubPage/HubpageImage13.png",
                content: "Trout is the name for a number of species of freshwater fish \
                    belonging to the genera Oncorhynchus, Salmo and Salvelinus, all of the \
                    subfamily Salmoninae of the family Salmonidae. Most trout such as lake \
                    trout live in freshwater lakes and rivers exclusively, while others such \
                    as the rainbow trout may spend two or three years at sea before \
                    returning to fresh water to spawn, a habit more typical of salmon. Trout \
                    are an important food source for humans and wildlife.",
                col_span: 41,
                row_span: 41,
            },
        ],
    },
    GroupSpec {
        unique_id: "Group-4",
        title: "Aquarium Fish",
        subtitle: "Popular home-tank species",
        description: "Hardy, colorful species commonly kept in home aquaria and \
            ornamental ponds.",
        items: &[
            ItemSpec {
                unique_id: "Medium-Group-4-Item1",
                title: "Clown loach",
                image_path: "Assets/HubPage/HubpageImage14.png",
                content: "Information about the maximum size of the clown loach varies, \
                    with some estimates ranging from 12 to 16 inches, and with typical adult \
                    sizes ranging from 7 to 10 inches. The fish's body is long and laterally \
                    compressed, whitish-orange to reddish-orange, with three thick, black, \
                    triangular, vertical bands. The fish has a movable spine that lies in a \
                    groove below the eye, which may be extended as a defense mechanism. \
                    Clown loaches can make clicking sounds when they are happy or mating.",
                col_span: 41,
                row_span: 41,
            },
            ItemSpec {
                unique_id: "Medium-Group-4-Item2",
                title: "Balashark",
                image_path: "Assets/HubPage/HubpageImage15.png",
                content: "Bala sharks are popular aquarium fish, generally peaceful and \
                    good companions to many other types of tropical fish. The nickname shark \
                    is used because of their torpedo-shaped bodies and long fins; they are \
                    not actual sharks. They are a hardy fish that will tolerate temperature \
                    and pH changes to which other fish may be sensitive, but given their \
                    adult size, schooling behavior, and swimming speed, they quickly grow to \
                    need much more room than the average home tank provides.",
                col_span: 41,
                row_span: 41,
            },
            ItemSpec {
                unique_id: "Medium-Group-4-Item3",
                title: "Koi Carp",
                image_path: "Assets/HubPage/HubpageImage16.png",
                content: "Carp are a large group of fish originally found in Central Europe \
                    and Asia. Carp were first bred for color mutations in China more than a \
                    thousand years ago, where selective breeding of the Prussian carp led to \
                    the development of the goldfish. Common carp were bred for color in \
                    Japan in the 1820s, initially in the town of Ojiya in the Niigata \
                    prefecture. By the 20th century, a number of color patterns had been \
                    established, most notably the red-and-white Kohaku. The outside world \
                    was not aware of the development of color variations in koi until 1914, \
                    when the Niigata koi were exhibited in Tokyo; at that point, interest in \
                    koi exploded throughout Japan.",
                col_span: 41,
                row_span: 41,
            },
            ItemSpec {
                unique_id: "Medium-Group-4-Item4",
                title: "Marine hatchetfish",
                image_path: "Assets/HubPage/HubpageImage17.png",
                content: "Found in tropical and subtropical waters of the Atlantic, Pacific \
                    and Indian Oceans, marine hatchetfishes range in size from Polyipnus \
                    danae at 2.8 cm to the 12 cm-long giant hatchetfish. They are small \
                    deep-sea fishes which have evolved a peculiar body shape and have \
                    bioluminescent photophores. The latter allow them to use \
                    counterillumination to escape predators that lurk in the depths: by \
                    matching the light intensity with the light penetrating the water from \
                    above, the fish does not appear darker if seen from below.",
                col_span: 41,
                row_span: 41,
            },
        ],
    },
];

/// Builds the catalog from the embedded content.
///
/// Called once by `Catalog::instance`; exposed within the crate so tests can
/// build fresh catalogs without touching the process-wide singleton.
pub(crate) fn build_catalog() -> Catalog {
    let groups = GROUPS
        .iter()
        .map(|spec| {
            let group = Group::new(
                spec.unique_id,
                spec.title,
                spec.subtitle,
                "Assets/DarkGray.png",
                spec.description,
            );
            for item in spec.items {
                group.add_item(Item::new(
                    item.unique_id,
                    item.title,
                    item.title,
                    item.image_path,
                    format!("{}, one of the {}.", item.title, spec.title),
                    item.content,
                    item.col_span,
                    item.row_span,
                    spec.unique_id,
                ));
            }
            group
        })
        .collect();

    Catalog::with_groups(groups)
}
