//! Irregular-form table backing the lemmatizer.
//!
//! Inflected form → base form, folded into a shared immutable map at first
//! use. Entries are inserted in order, so a later entry for the same form
//! wins (the adjective readings of `better`/`worse` shadow the adverb ones).

/// Known irregular inflected forms and their lemmas.
///
/// Verbs carry every attested tense, participle, gerund, and third-person
/// form, including compound derivatives (`undertook`, `overran`). Nouns
/// cover irregular plurals with Latin/Greek morphology. Adjectives and
/// adverbs cover suppletive comparatives and superlatives.
pub static IRREGULAR_FORMS: &[(&str, &str)] = &[
    // be
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    // have
    ("have", "have"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    // do
    ("do", "do"),
    ("does", "do"),
    ("did", "do"),
    ("doing", "do"),
    ("done", "do"),
    // go
    ("go", "go"),
    ("goes", "go"),
    ("went", "go"),
    ("going", "go"),
    ("gone", "go"),
    ("undergo", "undergo"),
    ("underwent", "undergo"),
    ("undergone", "undergo"),
    ("forgo", "forgo"),
    ("forwent", "forgo"),
    ("forgone", "forgo"),
    // run
    ("ran", "run"),
    ("running", "run"),
    ("runs", "run"),
    ("overran", "overrun"),
    ("overrun", "overrun"),
    ("reran", "rerun"),
    ("rerun", "rerun"),
    // take
    ("took", "take"),
    ("taken", "take"),
    ("taking", "take"),
    ("takes", "take"),
    ("undertook", "undertake"),
    ("undertaken", "undertake"),
    ("mistook", "mistake"),
    ("mistaken", "mistake"),
    ("overtook", "overtake"),
    ("overtaken", "overtake"),
    ("retook", "retake"),
    ("retaken", "retake"),
    // give
    ("gave", "give"),
    ("given", "give"),
    ("giving", "give"),
    ("gives", "give"),
    ("forgave", "forgive"),
    ("forgiven", "forgive"),
    // see
    ("saw", "see"),
    ("seen", "see"),
    ("seeing", "see"),
    ("sees", "see"),
    ("foresee", "foresee"),
    ("foresaw", "foresee"),
    ("foreseen", "foresee"),
    ("oversee", "oversee"),
    ("oversaw", "oversee"),
    ("overseen", "oversee"),
    // come
    ("came", "come"),
    ("coming", "come"),
    ("comes", "come"),
    ("become", "become"),
    ("became", "become"),
    ("overcome", "overcome"),
    ("overcame", "overcome"),
    // know
    ("knew", "know"),
    ("known", "know"),
    ("knowing", "know"),
    ("knows", "know"),
    // make
    ("made", "make"),
    ("making", "make"),
    ("makes", "make"),
    ("remake", "remake"),
    ("remade", "remake"),
    ("unmake", "unmake"),
    ("unmade", "unmake"),
    // say
    ("said", "say"),
    ("saying", "say"),
    ("says", "say"),
    // tell
    ("told", "tell"),
    ("telling", "tell"),
    ("tells", "tell"),
    ("retell", "retell"),
    ("retold", "retell"),
    ("foretell", "foretell"),
    ("foretold", "foretell"),
    // think
    ("thought", "think"),
    ("thinking", "think"),
    ("thinks", "think"),
    ("rethought", "rethink"),
    // find
    ("found", "find"),
    ("finding", "find"),
    ("finds", "find"),
    // get
    ("got", "get"),
    ("gotten", "get"),
    ("getting", "get"),
    ("gets", "get"),
    ("forget", "forget"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("beget", "beget"),
    ("begot", "beget"),
    ("begotten", "beget"),
    // leave
    ("left", "leave"),
    ("leaving", "leave"),
    ("leaves", "leave"),
    // feel
    ("felt", "feel"),
    ("feeling", "feel"),
    ("feels", "feel"),
    // bring
    ("brought", "bring"),
    ("bringing", "bring"),
    ("brings", "bring"),
    // buy
    ("bought", "buy"),
    ("buying", "buy"),
    ("buys", "buy"),
    // catch
    ("caught", "catch"),
    ("catching", "catch"),
    ("catches", "catch"),
    // teach
    ("taught", "teach"),
    ("teaching", "teach"),
    ("teaches", "teach"),
    // seek
    ("sought", "seek"),
    ("seeking", "seek"),
    ("seeks", "seek"),
    // write
    ("wrote", "write"),
    ("written", "write"),
    ("writing", "write"),
    ("writes", "write"),
    ("rewrite", "rewrite"),
    ("rewrote", "rewrite"),
    ("rewritten", "rewrite"),
    ("overwrite", "overwrite"),
    ("overwrote", "overwrite"),
    ("overwritten", "overwrite"),
    // speak
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("speaking", "speak"),
    ("speaks", "speak"),
    // break
    ("broke", "break"),
    ("broken", "break"),
    ("breaking", "break"),
    ("breaks", "break"),
    ("outbreak", "outbreak"),
    ("outbroke", "outbreak"),
    ("outbroken", "outbreak"),
    // choose
    ("chose", "choose"),
    ("chosen", "choose"),
    ("choosing", "choose"),
    ("chooses", "choose"),
    // drive
    ("drove", "drive"),
    ("driven", "drive"),
    ("driving", "drive"),
    ("drives", "drive"),
    ("overdrive", "overdrive"),
    ("overdrove", "overdrive"),
    ("overdriven", "overdrive"),
    // ride
    ("rode", "ride"),
    ("ridden", "ride"),
    ("riding", "ride"),
    ("rides", "ride"),
    ("override", "override"),
    ("overrode", "override"),
    ("overridden", "override"),
    // rise
    ("rose", "rise"),
    ("risen", "rise"),
    ("rising", "rise"),
    ("rises", "rise"),
    ("arise", "arise"),
    ("arose", "arise"),
    ("arisen", "arise"),
    // fly
    ("flew", "fly"),
    ("flown", "fly"),
    ("flying", "fly"),
    ("flies", "fly"),
    ("overfly", "overfly"),
    ("overflew", "overfly"),
    ("overflown", "overfly"),
    // grow
    ("grew", "grow"),
    ("grown", "grow"),
    ("growing", "grow"),
    ("grows", "grow"),
    ("outgrow", "outgrow"),
    ("outgrew", "outgrow"),
    ("outgrown", "outgrow"),
    // throw
    ("threw", "throw"),
    ("thrown", "throw"),
    ("throwing", "throw"),
    ("throws", "throw"),
    ("overthrow", "overthrow"),
    ("overthrew", "overthrow"),
    ("overthrown", "overthrow"),
    // draw
    ("drew", "draw"),
    ("drawn", "draw"),
    ("drawing", "draw"),
    ("draws", "draw"),
    ("withdraw", "withdraw"),
    ("withdrew", "withdraw"),
    ("withdrawn", "withdraw"),
    // sing
    ("sang", "sing"),
    ("sung", "sing"),
    ("singing", "sing"),
    ("sings", "sing"),
    // swim
    ("swam", "swim"),
    ("swum", "swim"),
    ("swimming", "swim"),
    ("swims", "swim"),
    // begin
    ("began", "begin"),
    ("begun", "begin"),
    ("beginning", "begin"),
    ("begins", "begin"),
    // drink
    ("drank", "drink"),
    ("drunk", "drink"),
    ("drinking", "drink"),
    ("drinks", "drink"),
    // ring
    ("rang", "ring"),
    ("rung", "ring"),
    ("ringing", "ring"),
    ("rings", "ring"),
    // sit
    ("sat", "sit"),
    ("sitting", "sit"),
    ("sits", "sit"),
    ("babysit", "babysit"),
    ("babysat", "babysit"),
    // stand
    ("stood", "stand"),
    ("standing", "stand"),
    ("stands", "stand"),
    ("understand", "understand"),
    ("understood", "understand"),
    ("withstand", "withstand"),
    ("withstood", "withstand"),
    // hold
    ("held", "hold"),
    ("holding", "hold"),
    ("holds", "hold"),
    ("behold", "behold"),
    ("beheld", "behold"),
    ("withhold", "withhold"),
    ("withheld", "withhold"),
    ("uphold", "uphold"),
    ("upheld", "uphold"),
    // read
    ("read", "read"),
    ("reading", "read"),
    ("reads", "read"),
    // lead
    ("led", "lead"),
    ("leading", "lead"),
    ("leads", "lead"),
    ("mislead", "mislead"),
    ("misled", "mislead"),
    // meet
    ("met", "meet"),
    ("meeting", "meet"),
    ("meets", "meet"),
    // pay
    ("paid", "pay"),
    ("paying", "pay"),
    ("pays", "pay"),
    ("repay", "repay"),
    ("repaid", "repay"),
    ("overpay", "overpay"),
    ("overpaid", "overpay"),
    // send
    ("sent", "send"),
    ("sending", "send"),
    ("sends", "send"),
    // spend
    ("spent", "spend"),
    ("spending", "spend"),
    ("spends", "spend"),
    ("overspend", "overspend"),
    ("overspent", "overspend"),
    // build
    ("built", "build"),
    ("building", "build"),
    ("builds", "build"),
    ("rebuild", "rebuild"),
    ("rebuilt", "rebuild"),
    // lose
    ("lost", "lose"),
    ("losing", "lose"),
    ("loses", "lose"),
    // keep
    ("kept", "keep"),
    ("keeping", "keep"),
    ("keeps", "keep"),
    // sleep
    ("slept", "sleep"),
    ("sleeping", "sleep"),
    ("sleeps", "sleep"),
    ("oversleep", "oversleep"),
    ("overslept", "oversleep"),
    // win
    ("won", "win"),
    ("winning", "win"),
    ("wins", "win"),
    // wear
    ("wore", "wear"),
    ("worn", "wear"),
    ("wearing", "wear"),
    ("wears", "wear"),
    // beat
    ("beat", "beat"),
    ("beaten", "beat"),
    ("beating", "beat"),
    ("beats", "beat"),
    // bite
    ("bit", "bite"),
    ("bitten", "bite"),
    ("biting", "bite"),
    ("bites", "bite"),
    // bind
    ("bound", "bind"),
    ("binding", "bind"),
    ("binds", "bind"),
    ("unbind", "unbind"),
    ("unbound", "unbind"),
    ("rebind", "rebind"),
    ("rebound", "rebind"),
    // bleed
    ("bled", "bleed"),
    ("bleeding", "bleed"),
    ("bleeds", "bleed"),
    // blow
    ("blew", "blow"),
    ("blown", "blow"),
    ("blowing", "blow"),
    ("blows", "blow"),
    ("overblow", "overblow"),
    ("overblew", "overblow"),
    ("overblown", "overblow"),
    // bear
    ("bore", "bear"),
    ("born", "bear"),
    ("borne", "bear"),
    ("bearing", "bear"),
    ("bears", "bear"),
    // eat
    ("ate", "eat"),
    ("eaten", "eat"),
    ("eating", "eat"),
    ("eats", "eat"),
    ("overeat", "overeat"),
    ("overate", "overeat"),
    ("overeaten", "overeat"),
    // fall
    ("fell", "fall"),
    ("fallen", "fall"),
    ("falling", "fall"),
    ("falls", "fall"),
    ("befall", "befall"),
    ("befell", "befall"),
    ("befallen", "befall"),
    // hide
    ("hid", "hide"),
    ("hidden", "hide"),
    ("hiding", "hide"),
    ("hides", "hide"),
    // shake
    ("shook", "shake"),
    ("shaken", "shake"),
    ("shaking", "shake"),
    ("shakes", "shake"),
    // freeze
    ("froze", "freeze"),
    ("frozen", "freeze"),
    ("freezing", "freeze"),
    ("freezes", "freeze"),
    // steal
    ("stole", "steal"),
    ("stolen", "steal"),
    ("stealing", "steal"),
    ("steals", "steal"),
    // tear
    ("tore", "tear"),
    ("torn", "tear"),
    ("tearing", "tear"),
    ("tears", "tear"),
    // weave
    ("wove", "weave"),
    ("woven", "weave"),
    ("weaving", "weave"),
    ("weaves", "weave"),
    // forbid
    ("forbade", "forbid"),
    ("forbidden", "forbid"),
    ("forbidding", "forbid"),
    ("forbids", "forbid"),
    // forgive
    ("forgave", "forgive"),
    ("forgiven", "forgive"),
    ("forgiving", "forgive"),
    ("forgives", "forgive"),
    // lie
    ("lay", "lie"),
    ("lain", "lie"),
    ("lying", "lie"),
    ("lies", "lie"),
    // lay
    ("laid", "lay"),
    ("laying", "lay"),
    ("lays", "lay"),
    // shine
    ("shone", "shine"),
    ("shined", "shine"),
    ("shining", "shine"),
    ("shines", "shine"),
    // shoot
    ("shot", "shoot"),
    ("shooting", "shoot"),
    ("shoots", "shoot"),
    ("overshoot", "overshoot"),
    ("overshot", "overshoot"),
    // show
    ("showed", "show"),
    ("shown", "show"),
    ("showing", "show"),
    ("shows", "show"),
    // shrink
    ("shrank", "shrink"),
    ("shrunk", "shrink"),
    ("shrinking", "shrink"),
    ("shrinks", "shrink"),
    // shut
    ("shut", "shut"),
    ("shutting", "shut"),
    ("shuts", "shut"),
    // slay
    ("slew", "slay"),
    ("slain", "slay"),
    ("slaying", "slay"),
    ("slays", "slay"),
    // slide
    ("slid", "slide"),
    ("sliding", "slide"),
    ("slides", "slide"),
    // sling
    ("slung", "sling"),
    ("slinging", "sling"),
    ("slings", "sling"),
    // slit
    ("slit", "slit"),
    ("slitting", "slit"),
    ("slits", "slit"),
    // smite
    ("smote", "smite"),
    ("smitten", "smite"),
    ("smiting", "smite"),
    ("smites", "smite"),
    // sow
    ("sowed", "sow"),
    ("sown", "sow"),
    ("sowing", "sow"),
    ("sows", "sow"),
    // spin
    ("spun", "spin"),
    ("spinning", "spin"),
    ("spins", "spin"),
    // spit
    ("spat", "spit"),
    ("spit", "spit"),
    ("spitting", "spit"),
    ("spits", "spit"),
    // split
    ("split", "split"),
    ("splitting", "split"),
    ("splits", "split"),
    // spread
    ("spread", "spread"),
    ("spreading", "spread"),
    ("spreads", "spread"),
    // spring
    ("sprang", "spring"),
    ("sprung", "spring"),
    ("springing", "spring"),
    ("springs", "spring"),
    // stick
    ("stuck", "stick"),
    ("sticking", "stick"),
    ("sticks", "stick"),
    // sting
    ("stung", "sting"),
    ("stinging", "sting"),
    ("stings", "sting"),
    // stink
    ("stank", "stink"),
    ("stunk", "stink"),
    ("stinking", "stink"),
    ("stinks", "stink"),
    // stride
    ("strode", "stride"),
    ("stridden", "stride"),
    ("striding", "stride"),
    ("strides", "stride"),
    // strike
    ("struck", "strike"),
    ("stricken", "strike"),
    ("striking", "strike"),
    ("strikes", "strike"),
    // string
    ("strung", "string"),
    ("stringing", "string"),
    ("strings", "string"),
    // strive
    ("strove", "strive"),
    ("striven", "strive"),
    ("striving", "strive"),
    ("strives", "strive"),
    // swear
    ("swore", "swear"),
    ("sworn", "swear"),
    ("swearing", "swear"),
    ("swears", "swear"),
    // sweep
    ("swept", "sweep"),
    ("sweeping", "sweep"),
    ("sweeps", "sweep"),
    // swell
    ("swelled", "swell"),
    ("swollen", "swell"),
    ("swelling", "swell"),
    ("swells", "swell"),
    // swing
    ("swung", "swing"),
    ("swinging", "swing"),
    ("swings", "swing"),
    // tread
    ("trod", "tread"),
    ("trodden", "tread"),
    ("treading", "tread"),
    ("treads", "tread"),
    // wake
    ("woke", "wake"),
    ("woken", "wake"),
    ("waking", "wake"),
    ("wakes", "wake"),
    ("awake", "awake"),
    ("awoke", "awake"),
    ("awoken", "awake"),
    // wind
    ("wound", "wind"),
    ("winding", "wind"),
    ("winds", "wind"),
    ("unwind", "unwind"),
    ("unwound", "unwind"),
    ("rewind", "rewind"),
    ("rewound", "rewind"),
    // wring
    ("wrung", "wring"),
    ("wringing", "wring"),
    ("wrings", "wring"),
    // light
    ("lit", "light"),
    ("lighted", "light"),
    ("lighting", "light"),
    ("lights", "light"),
    // quit
    ("quit", "quit"),
    ("quitting", "quit"),
    ("quits", "quit"),
    // set
    ("set", "set"),
    ("setting", "set"),
    ("sets", "set"),
    ("upset", "upset"),
    ("reset", "reset"),
    ("offset", "offset"),
    // cut
    ("cut", "cut"),
    ("cutting", "cut"),
    ("cuts", "cut"),
    ("undercut", "undercut"),
    // hit
    ("hit", "hit"),
    ("hitting", "hit"),
    ("hits", "hit"),
    // put
    ("put", "put"),
    ("putting", "put"),
    ("puts", "put"),
    ("input", "input"),
    ("output", "output"),
    // let
    ("let", "let"),
    ("letting", "let"),
    ("lets", "let"),
    // cost
    ("cost", "cost"),
    ("costing", "cost"),
    ("costs", "cost"),
    // cast
    ("cast", "cast"),
    ("casting", "cast"),
    ("casts", "cast"),
    ("broadcast", "broadcast"),
    ("forecast", "forecast"),
    ("overcast", "overcast"),
    // burst
    ("burst", "burst"),
    ("bursting", "burst"),
    ("bursts", "burst"),
    // hurt
    ("hurt", "hurt"),
    ("hurting", "hurt"),
    ("hurts", "hurt"),
    // bet
    ("bet", "bet"),
    ("betting", "bet"),
    ("bets", "bet"),
    // bend
    ("bent", "bend"),
    ("bending", "bend"),
    ("bends", "bend"),
    // lend
    ("lent", "lend"),
    ("lending", "lend"),
    ("lends", "lend"),
    // feed
    ("fed", "feed"),
    ("feeding", "feed"),
    ("feeds", "feed"),
    ("overfeed", "overfeed"),
    ("overfed", "overfeed"),
    // breed
    ("bred", "breed"),
    ("breeding", "breed"),
    ("breeds", "breed"),
    ("crossbreed", "crossbreed"),
    ("crossbred", "crossbreed"),
    // speed
    ("sped", "speed"),
    ("speeding", "speed"),
    ("speeds", "speed"),
    // flee
    ("fled", "flee"),
    ("fleeing", "flee"),
    ("flees", "flee"),
    // deal
    ("dealt", "deal"),
    ("dealing", "deal"),
    ("deals", "deal"),
    // mean
    ("meant", "mean"),
    ("meaning", "mean"),
    ("means", "mean"),
    // lean
    ("leant", "lean"),
    ("leaned", "lean"),
    ("leaning", "lean"),
    ("leans", "lean"),
    // leap
    ("leapt", "leap"),
    ("leaped", "leap"),
    ("leaping", "leap"),
    ("leaps", "leap"),
    ("overleap", "overleap"),
    ("overleapt", "overleap"),
    // learn
    ("learnt", "learn"),
    ("learned", "learn"),
    ("learning", "learn"),
    ("learns", "learn"),
    // burn
    ("burnt", "burn"),
    ("burned", "burn"),
    ("burning", "burn"),
    ("burns", "burn"),
    // smell
    ("smelt", "smell"),
    ("smelled", "smell"),
    ("smelling", "smell"),
    ("smells", "smell"),
    // spell
    ("spelt", "spell"),
    ("spelled", "spell"),
    ("spelling", "spell"),
    ("spells", "spell"),
    ("misspell", "misspell"),
    ("misspelt", "misspell"),
    // spill
    ("spilt", "spill"),
    ("spilled", "spill"),
    ("spilling", "spill"),
    ("spills", "spill"),
    // spoil
    ("spoilt", "spoil"),
    ("spoiled", "spoil"),
    ("spoiling", "spoil"),
    ("spoils", "spoil"),
    // dream
    ("dreamt", "dream"),
    ("dreamed", "dream"),
    ("dreaming", "dream"),
    ("dreams", "dream"),
    // dwell
    ("dwelt", "dwell"),
    ("dwelled", "dwell"),
    ("dwelling", "dwell"),
    ("dwells", "dwell"),
    // hang
    ("hung", "hang"),
    ("hanged", "hang"),
    ("hanging", "hang"),
    ("hangs", "hang"),
    ("overhang", "overhang"),
    ("overhung", "overhang"),
    // dig
    ("dug", "dig"),
    ("digging", "dig"),
    ("digs", "dig"),
    // cling
    ("clung", "cling"),
    ("clinging", "cling"),
    ("clings", "cling"),
    // fling
    ("flung", "fling"),
    ("flinging", "fling"),
    ("flings", "fling"),
    // wring
    ("wrung", "wring"),
    ("wringing", "wring"),
    ("wrings", "wring"),
    // agent nouns of common motion verbs
    ("runner", "run"),
    ("runners", "run"),
    ("swimmer", "swim"),
    ("swimmers", "swim"),
    // irregular noun plurals (including Latin and Greek morphology)
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("people", "person"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("deer", "deer"),
    ("sheep", "sheep"),
    ("fish", "fish"),
    ("moose", "moose"),
    ("series", "series"),
    ("species", "species"),
    ("aircraft", "aircraft"),
    ("spacecraft", "spacecraft"),
    ("salmon", "salmon"),
    ("trout", "trout"),
    ("swine", "swine"),
    ("bison", "bison"),
    ("buffalo", "buffalo"),
    ("shrimp", "shrimp"),
    ("cod", "cod"),
    ("squid", "squid"),
    ("cacti", "cactus"),
    ("cactuses", "cactus"),
    ("fungi", "fungus"),
    ("funguses", "fungus"),
    ("nuclei", "nucleus"),
    ("syllabi", "syllabus"),
    ("syllabuses", "syllabus"),
    ("alumni", "alumnus"),
    ("foci", "focus"),
    ("focuses", "focus"),
    ("radii", "radius"),
    ("stimuli", "stimulus"),
    ("termini", "terminus"),
    ("terminuses", "terminus"),
    ("cacti", "cactus"),
    ("analyses", "analysis"),
    ("axes", "axis"),
    ("bases", "basis"),
    ("crises", "crisis"),
    ("diagnoses", "diagnosis"),
    ("ellipses", "ellipsis"),
    ("hypotheses", "hypothesis"),
    ("oases", "oasis"),
    ("parentheses", "parenthesis"),
    ("synopses", "synopsis"),
    ("syntheses", "synthesis"),
    ("theses", "thesis"),
    ("phenomena", "phenomenon"),
    ("criteria", "criterion"),
    ("data", "datum"),
    ("errata", "erratum"),
    ("strata", "stratum"),
    ("addenda", "addendum"),
    ("bacteria", "bacterium"),
    ("curricula", "curriculum"),
    ("memoranda", "memorandum"),
    ("media", "medium"),
    ("millennia", "millennium"),
    ("ova", "ovum"),
    ("spectra", "spectrum"),
    ("symposia", "symposium"),
    ("algae", "alga"),
    ("antennae", "antenna"),
    ("antennas", "antenna"),
    ("formulae", "formula"),
    ("formulas", "formula"),
    ("larvae", "larva"),
    ("nebulae", "nebula"),
    ("vertebrae", "vertebra"),
    ("vitae", "vita"),
    ("appendices", "appendix"),
    ("appendixes", "appendix"),
    ("codices", "codex"),
    ("indices", "index"),
    ("indexes", "index"),
    ("matrices", "matrix"),
    ("matrixes", "matrix"),
    ("vertices", "vertex"),
    ("vortices", "vortex"),
    ("vortexes", "vortex"),
    ("apices", "apex"),
    ("apexes", "apex"),
    ("cortices", "cortex"),
    ("helices", "helix"),
    ("loci", "locus"),
    ("fungi", "fungus"),
    ("octopi", "octopus"),
    ("octopuses", "octopus"),
    ("platypuses", "platypus"),
    ("platypi", "platypus"),
    ("cacti", "cactus"),
    ("genii", "genius"),
    ("geniuses", "genius"),
    ("styli", "stylus"),
    ("styluses", "stylus"),
    ("abscissae", "abscissa"),
    ("amoebae", "amoeba"),
    ("amoebas", "amoeba"),
    ("antitheses", "antithesis"),
    ("aphides", "aphis"),
    ("apices", "apex"),
    ("automata", "automaton"),
    ("automatons", "automaton"),
    ("cervices", "cervix"),
    ("crania", "cranium"),
    ("equilibria", "equilibrium"),
    ("ganglia", "ganglion"),
    ("genera", "genus"),
    ("gymnasia", "gymnasium"),
    ("loci", "locus"),
    ("penumbrae", "penumbra"),
    ("phyla", "phylum"),
    ("quanta", "quantum"),
    ("rostra", "rostrum"),
    ("septa", "septum"),
    ("solaria", "solarium"),
    ("stamina", "stamen"),
    ("thoraces", "thorax"),
    ("ultimata", "ultimatum"),
    ("umbrae", "umbra"),
    ("uteri", "uterus"),
    ("viscera", "viscus"),
    ("aquaria", "aquarium"),
    ("aquariums", "aquarium"),
    ("consortia", "consortium"),
    ("crania", "cranium"),
    ("craniums", "cranium"),
    ("emporium", "emporium"),
    ("emporia", "emporium"),
    ("equilibria", "equilibrium"),
    ("equilibriums", "equilibrium"),
    ("ganglia", "ganglion"),
    ("ganglions", "ganglion"),
    ("gymnasia", "gymnasium"),
    ("gymnasiums", "gymnasium"),
    ("honoraria", "honorarium"),
    ("honorariums", "honorarium"),
    ("mausolea", "mausoleum"),
    ("mausoleums", "mausoleum"),
    ("moratorium", "moratorium"),
    ("moratoria", "moratorium"),
    ("planetaria", "planetarium"),
    ("planetariums", "planetarium"),
    ("podiums", "podium"),
    ("podia", "podium"),
    ("referenda", "referendum"),
    ("referendums", "referendum"),
    ("rostra", "rostrum"),
    ("rostrums", "rostrum"),
    ("sanatoriums", "sanatorium"),
    ("sanatoria", "sanatorium"),
    ("stadiums", "stadium"),
    ("stadia", "stadium"),
    ("symposiums", "symposium"),
    ("symposia", "symposium"),
    ("terrariums", "terrarium"),
    ("terraria", "terrarium"),
    ("ultimatums", "ultimatum"),
    ("ultimata", "ultimatum"),
    ("vivariums", "vivarium"),
    ("vivaria", "vivarium"),
    ("atria", "atrium"),
    ("bacilli", "bacillus"),
    ("bronchi", "bronchus"),
    ("cilia", "cilium"),
    ("flagella", "flagellum"),
    ("ganglia", "ganglion"),
    ("mitochondria", "mitochondrion"),
    ("mycelia", "mycelium"),
    ("ova", "ovum"),
    ("protozoa", "protozoan"),
    ("septa", "septum"),
    ("spermatozoa", "spermatozoon"),
    ("venae", "vena"),
    ("abscissae", "abscissa"),
    ("abscissas", "abscissa"),
    ("apices", "apex"),
    ("asymptotes", "asymptote"),
    ("axes", "axis"),
    ("binomials", "binomial"),
    ("corollaries", "corollary"),
    ("loci", "locus"),
    ("maxima", "maximum"),
    ("maximums", "maximum"),
    ("minima", "minimum"),
    ("minimums", "minimum"),
    ("optima", "optimum"),
    ("optimums", "optimum"),
    ("polyhedra", "polyhedron"),
    ("polyhedrons", "polyhedron"),
    ("quanta", "quantum"),
    ("radices", "radix"),
    ("simplices", "simplex"),
    ("vertices", "vertex"),
    ("corpora", "corpus"),
    ("genera", "genus"),
    ("lemmas", "lemma"),
    ("lemmata", "lemma"),
    ("lexica", "lexicon"),
    ("lexicons", "lexicon"),
    ("parentheses", "parenthesis"),
    ("schemata", "schema"),
    ("schemas", "schema"),
    ("amoebae", "amoeba"),
    ("antennae", "antenna"),
    ("larvae", "larva"),
    ("pupae", "pupa"),
    ("chrysalises", "chrysalis"),
    ("chrysalides", "chrysalis"),
    ("addenda", "addendum"),
    ("addendums", "addendum"),
    ("agenda", "agendum"),
    ("algae", "alga"),
    ("alumni", "alumnus"),
    ("alumnae", "alumna"),
    ("automata", "automaton"),
    ("automatons", "automaton"),
    ("candelabra", "candelabrum"),
    ("corrigenda", "corrigendum"),
    ("desiderata", "desideratum"),
    ("dicta", "dictum"),
    ("effluvia", "effluvium"),
    ("errata", "erratum"),
    ("insignia", "insigne"),
    ("memoranda", "memorandum"),
    ("millennia", "millennium"),
    ("millenniums", "millennium"),
    ("minima", "minimum"),
    ("phyla", "phylum"),
    ("quanta", "quantum"),
    ("spectra", "spectrum"),
    ("spectrums", "spectrum"),
    ("strata", "stratum"),
    ("symposia", "symposium"),
    ("vaccinia", "vaccinium"),
    // suppletive adverb comparatives and superlatives
    ("worse", "badly"),
    ("worst", "badly"),
    ("better", "well"),
    ("best", "well"),
    ("more", "much"),
    ("most", "much"),
    ("less", "little"),
    ("least", "little"),
    ("farther", "far"),
    ("farthest", "far"),
    ("further", "far"),
    ("furthest", "far"),
    // suppletive adjective comparatives and superlatives
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("more", "much"),
    ("most", "much"),
    ("less", "little"),
    ("least", "little"),
    ("farther", "far"),
    ("farthest", "far"),
    ("further", "far"),
    ("furthest", "far"),
    ("older", "old"),
    ("oldest", "old"),
    ("elder", "old"),
    ("eldest", "old"),
];
