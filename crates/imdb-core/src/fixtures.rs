//! Trimmed IMDb pages used by parser and scraper tests.

/// `/title/tt0096697` (series, current markup).
pub const SIMPSONS_MAIN: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<title>The Simpsons (TV Series 1989– ) - IMDb</title>
<meta property="og:type" content="video.tv_show">
<script type="application/ld+json">{"@context":"https://schema.org","@type":"TVSeries","url":"/title/tt0096697/","name":"The Simpsons","description":"The satiric adventures of a working-class family in the misfit city of Springfield.","contentRating":"TV-PG","datePublished":"1989-12-17","genre":["Animation","Comedy"],"aggregateRating":{"@type":"AggregateRating","ratingCount":412345,"bestRating":10,"worstRating":1,"ratingValue":8.7}}</script>
</head>
<body>
<section>
  <h1 data-testid="hero__pageTitle"><span class="hero__primary-text">The Simpsons</span></h1>
  <ul data-testid="hero-title-block__metadata"><li>TV Series</li><li><a href="/title/tt0096697/releaseinfo">1989–</a></li></ul>
  <div data-testid="hero-media__poster"><div><img alt="Poster" src="https://m.media-amazon.com/images/M/MV5BYjFkMTlk._V1_QL75_UX190_CR0,0,190,281_.jpg"></div></div>
  <p data-testid="plot"><span data-testid="plot-xl">The satiric adventures of a working-class family.</span></p>
</section>
<section data-testid="MoreLikeThis">
  <div class="ipc-sub-grid">
    <div class="ipc-poster-card"><div><a href="/title/tt0182576/?ref_=tt_sims_tt_t_1"><span>Family Guy</span></a></div></div>
    <div class="ipc-poster-card"><div><a href="/title/tt0121955/?ref_=tt_sims_tt_t_2"><span>South Park</span></a></div></div>
  </div>
</section>
</body>
</html>"##;

/// `/title/tt0096697` served with `Accept-Language: fr`.
pub const SIMPSONS_MAIN_FR: &str = r##"<!DOCTYPE html>
<html lang="fr">
<head>
<meta property="og:type" content="video.tv_show">
<script type="application/ld+json">{"@type":"TVSeries","name":"Les Simpson","description":"Les aventures satiriques d&apos;une famille ouvri&egrave;re.","contentRating":"Tous publics","datePublished":"1989-12-17","genre":["Animation","Comedy"]}</script>
</head>
<body>
  <h1 data-testid="hero__pageTitle"><span class="hero__primary-text">Les Simpson</span></h1>
  <div data-testid="hero-title-block__original-title">Titre original : The Simpsons</div>
</body>
</html>"##;

/// `/title/tt0096697/technical`
pub const SIMPSONS_TECHNICAL: &str = r##"<!DOCTYPE html>
<html>
<body>
<ul class="ipc-metadata-list">
  <li data-testid="title-techspec_runtime"><span>Runtime</span><div><span>22 min</span></div></li>
  <li data-testid="title-techspec_soundmix"><span>Sound mix</span><div>Dolby Digital</div></li>
</ul>
</body>
</html>"##;

/// `/title/tt0096697/fullcredits`
pub const SIMPSONS_CREDITS: &str = r##"<!DOCTYPE html>
<html>
<head><meta property="og:type" content="video.tv_show"></head>
<body>
<div id="fullcredits_content" class="header">
  <h4 class="dataHeaderWithBorder">Series Directed by&nbsp;</h4>
  <table class="simpleTable simpleCreditsTable">
    <tr><td class="name"><a href="/name/nm0004254/?ref_=ttfc_fc_dr1"> David Silverman</a></td><td>...</td><td class="credit">(160 episodes)</td></tr>
    <tr><td class="name"><a href="/name/nm0551643/?ref_=ttfc_fc_dr2"> Mark Kirkland</a></td><td>...</td><td class="credit">(80 episodes)</td></tr>
  </table>
  <h4 class="dataHeaderWithBorder">Series Writing Credits</h4>
  <table class="simpleTable simpleCreditsTable">
    <tr><td class="name"><a href="/name/nm0004981/?ref_=ttfc_fc_wr1"> Matt Groening</a></td><td class="credit">(created by)</td></tr>
    <tr><td class="name"><a href="/name/nm0103090/?ref_=ttfc_fc_wr2"> James L. Brooks</a></td><td class="credit">(developed by)</td></tr>
  </table>
  <h4 name="cast" id="cast" class="dataHeaderWithBorder">Series Cast</h4>
  <table class="cast_list">
    <tr><td colspan="4" class="castlist_label"></td></tr>
    <tr class="odd">
      <td class="primary_photo"><a href="/name/nm0144657/?ref_=ttfc_fc_cl_i1"><img alt="Dan Castellaneta"></a></td>
      <td><a href="/name/nm0144657/?ref_=ttfc_fc_cl_t1"> Dan Castellaneta</a></td>
      <td class="ellipsis">...</td>
      <td class="character"><a href="/title/tt0096697/characters/nm0144657">Homer Simpson</a></td>
    </tr>
    <tr class="even">
      <td class="primary_photo"><a href="/name/nm0001413/?ref_=ttfc_fc_cl_i2"><img alt="Julie Kavner"></a></td>
      <td><a href="/name/nm0001413/?ref_=ttfc_fc_cl_t2"> Julie Kavner</a></td>
      <td class="ellipsis">...</td>
      <td class="character"><a href="/title/tt0096697/characters/nm0001413">Marge Simpson</a></td>
    </tr>
  </table>
</div>
</body>
</html>"##;

/// `/title/tt0096697/episodes`
pub const SIMPSONS_EPISODES: &str = r##"<!DOCTYPE html>
<html>
<head><meta property="og:type" content="video.tv_show"></head>
<body>
<div id="episodes_content">
  <label for="bySeason">Season:</label>
  <select id="bySeason" tconst="tt0096697">
    <option value="1">1</option>
    <option value="2" selected="selected">2</option>
    <option value="-1">Unknown</option>
  </select>
</div>
</body>
</html>"##;

/// `/title/tt0096697/episodes?season=1`
pub const SIMPSONS_SEASON_1: &str = r##"<!DOCTYPE html>
<html>
<head><meta property="og:type" content="video.tv_show"></head>
<body>
<div class="list detail eplist">
  <div class="list_item odd" itemprop="episodes" itemscope itemtype="http://schema.org/TVEpisode">
    <div class="image"><a href="/title/tt0348034/?ref_=ttep_ep1" title="Simpsons Roasting on an Open Fire"><div>S1, Ep1</div></a></div>
    <div class="info" itemprop="episodes">
      <meta itemprop="episodeNumber" content="1"/>
      <div class="airdate">17 Dec. 1989</div>
      <strong><a href="/title/tt0348034/?ref_=ttep_ep1" title="Simpsons Roasting on an Open Fire" itemprop="name">Simpsons Roasting on an Open Fire</a></strong>
      <div class="ipl-rating-widget"><div class="ipl-rating-star small">
        <span class="ipl-rating-star__rating">8.1</span>
        <span class="ipl-rating-star__total-votes">(7,123)</span>
      </div></div>
      <div class="item_description" itemprop="description">
        With Mr. Burns cancelling the Christmas bonus, Homer gets a second job.
      </div>
      <div class="wtw-option-standalone" data-tconst="tt0348034"></div>
    </div>
  </div>
  <div class="list_item even" itemprop="episodes" itemscope itemtype="http://schema.org/TVEpisode">
    <div class="info" itemprop="episodes">
      <meta itemprop="episodeNumber" content="2"/>
      <strong><a href="/title/tt0701059/?ref_=ttep_ep2" itemprop="name">Bart the Genius</a></strong>
      <div class="ipl-rating-widget"><div class="ipl-rating-star small">
        <span class="ipl-rating-star__rating">7,6</span>
        <span class="ipl-rating-star__total-votes">(4.321)</span>
      </div></div>
      <div class="item_description" itemprop="description">
        <a href="/title/tt0701059/plotsummary">Add a Plot</a>
      </div>
      <div class="wtw-option-standalone" data-tconst="tt0701059"></div>
    </div>
  </div>
</div>
</body>
</html>"##;

/// `/title/tt0096697/episodes?season=2`
pub const SIMPSONS_SEASON_2: &str = r##"<!DOCTYPE html>
<html>
<head><meta property="og:type" content="video.tv_show"></head>
<body>
<div class="list detail eplist">
  <div class="list_item odd" itemprop="episodes" itemscope itemtype="http://schema.org/TVEpisode">
    <div class="info" itemprop="episodes">
      <meta itemprop="episodeNumber" content="1"/>
      <strong><a href="/title/tt0701067/?ref_=ttep_ep1" itemprop="name">Bart Gets an F</a></strong>
      <div class="item_description" itemprop="description">Bart has to pass a history test.</div>
    </div>
  </div>
</div>
</body>
</html>"##;

/// `/title/tt7286456` (movie, legacy markup, no `og:type`).
pub const JOKER_MAIN: &str = r##"<!DOCTYPE html>
<html>
<head>
<title>Coringa (2019) - IMDb</title>
<script type="application/ld+json">{"@context":"http://schema.org","@type":"Movie","url":"/title/tt7286456/","name":"Joker","description":"Arthur Fleck&apos;s descent &amp; fall."}</script>
</head>
<body>
<div class="title_wrapper">
  <h1 class="">Coringa&nbsp;<span id="titleYear">(<a href="/year/2019/?ref_=tt_ov_inf">2019</a>)</span></h1>
  <div class="originalTitle">Original title: Joker</div>
</div>
<div class="ratingValue">
  <strong><span itemprop="ratingValue">8,4</span></strong>
  <span itemprop="ratingCount">1.234.567</span>
</div>
<div class="poster"><a href="/title/tt7286456/mediaviewer/rm1"><img alt="Poster" src="https://example.com/joker.png"></a></div>
<div id="titleStoryLine">
  <div class="see-more inline canwrap">
    <h4 class="inline">Genres:</h4>
    <a href="/search/title?genres=crime">Crime</a>
    <span>|</span>
    <a href="/search/title?genres=drama">Drama</a>
    <span>|</span>
    <a href="/search/title?genres=thriller">Thriller</a>
  </div>
</div>
</body>
</html>"##;

/// `/title/tt7286456/technical`
pub const JOKER_TECHNICAL: &str = r##"<!DOCTYPE html>
<html>
<body>
<div id="technical_content">
  <table class="dataTable labelValueTable">
    <tbody>
      <tr><td class="label"> Runtime </td><td>2 hr 2 min (122 min)</td></tr>
      <tr><td class="label"> Color </td><td>Color</td></tr>
    </tbody>
  </table>
</div>
</body>
</html>"##;

/// `/title/tt7286456/fullcredits`
pub const JOKER_CREDITS: &str = r##"<!DOCTYPE html>
<html>
<body>
<div id="fullcredits_content" class="header">
  <h4 class="dataHeaderWithBorder">Directed by&nbsp;</h4>
  <table class="simpleTable simpleCreditsTable">
    <tr><td class="name"><a href="/name/nm0680846/"> Todd Phillips</a></td></tr>
  </table>
  <table class="cast_list">
    <tr class="odd">
      <td class="primary_photo"><a href="/name/nm0001618/"><img alt="Joaquin Phoenix"></a></td>
      <td><a href="/name/nm0001618/"> Joaquin Phoenix</a></td>
      <td class="character"><a href="/title/tt7286456/characters/nm0001618">Arthur Fleck</a></td>
    </tr>
  </table>
</div>
</body>
</html>"##;

/// `/name/nm0144657` (legacy name page).
pub const CASTELLANETA: &str = r##"<!DOCTYPE html>
<html>
<body>
<table id="name-overview-widget-layout">
  <tr><td>
    <h1 class="header"><span class="itemprop">Dan Castellaneta</span></h1>
    <div class="infobar" id="name-job-categories">
      <a href="#actor"><span class="itemprop">Actor</span></a> |
      <a href="#writer"><span class="itemprop">Writer</span></a> |
      <a href="#producer"><span class="itemprop">Producer</span></a>
    </div>
    <img id="name-poster" alt="Dan Castellaneta Picture" src="https://m.media-amazon.com/images/M/MV5BOTMyNjg2._V1_UY317_CR7,0,214,317_AL_.jpg">
    <div id="name-born-info" class="txt-block">
      <h4 class="inline">Born:</h4>
      <time datetime="1957-10-29"><a href="/search/name?birth_monthday=10-29">October 29</a></time>
    </div>
  </td></tr>
</table>
<div id="knownfor">
  <div class="knownfor-title"><div class="knownfor-title-role"><a href="/title/tt0096697/?ref_=nm_knf_t1" class="knownfor-ellipsis">The Simpsons</a><span class="knownfor-ellipsis">Homer Simpson</span></div></div>
  <div class="knownfor-title"><div class="knownfor-title-role"><a href="/title/tt0462538/?ref_=nm_knf_t2" class="knownfor-ellipsis">The Simpsons Movie</a></div></div>
</div>
<div id="filmography">
  <div id="filmo-head-actor" class="head"><a name="actor">Actor</a> (2 credits)</div>
  <div class="filmo-category-section">
    <div class="filmo-row odd" id="actor-tt0096697"><span class="year_column">1989</span><b><a href="/title/tt0096697/">The Simpsons</a></b></div>
    <div class="filmo-row even" id="actor-tt0462538"><span class="year_column">2007</span><b><a href="/title/tt0462538/">The Simpsons Movie</a></b></div>
  </div>
  <div id="filmo-head-writer" class="head"><a name="writer">Writer</a></div>
  <div class="filmo-category-section">
    <div class="filmo-row odd"><b><a href="/title/tt0096697/">The Simpsons</a></b></div>
  </div>
</div>
</body>
</html>"##;

/// `/name/nm0001413` (current name heading, actress section).
pub const KAVNER: &str = r##"<!DOCTYPE html>
<html>
<body>
<h1 data-testid="hero__pageTitle"><span class="hero__primary-text">Julie Kavner</span></h1>
<div id="filmography">
  <div id="filmo-head-actress" class="head"><a name="actress">Actress</a></div>
  <div class="filmo-category-section">
    <div class="filmo-row odd"><b><a href="/title/tt0096697/">The Simpsons</a></b></div>
  </div>
  <div id="filmo-head-director" class="head"><a name="director">Director</a></div>
  <div class="filmo-category-section">
    <div class="filmo-row odd"><b><a href="/title/tt0110000/">Short Film</a></b></div>
  </div>
</div>
</body>
</html>"##;

/// `/find?q=Dragon%20Ball&s=tt` (legacy result table).
pub const SEARCH_DRAGON_BALL: &str = r##"<!DOCTYPE html>
<html>
<body>
<div class="findSection">
  <h3 class="findSectionHeader">Titles</h3>
  <table class="findList">
    <tr class="findResult odd">
      <td class="primary_photo"><a href="/title/tt0121220/?ref_=fn_tt_tt_1"><img src="https://example.com/dbz.jpg"></a></td>
      <td class="result_text"> <a href="/title/tt0121220/?ref_=fn_tt_tt_1">Dragon Ball Z</a> (1989) (TV Series) </td>
    </tr>
    <tr class="findResult even">
      <td class="primary_photo"><a href="/title/tt0088509/?ref_=fn_tt_tt_2"><img src="https://example.com/db.jpg"></a></td>
      <td class="result_text"> <a href="/title/tt0088509/?ref_=fn_tt_tt_2">Dragon Ball</a> (1986) (TV Series) </td>
    </tr>
    <tr class="findResult odd">
      <td class="primary_photo"><a href="/title/tt1207074/?ref_=fn_tt_tt_3"><img src="https://example.com/dbe.jpg"></a></td>
      <td class="result_text"> <a href="/title/tt1207074/?ref_=fn_tt_tt_3">Dragon Ball: Evolution</a> (2009) </td>
    </tr>
  </table>
</div>
</body>
</html>"##;

/// `/find?q=Castellaneta&s=nm` (current result list).
pub const SEARCH_CASTELLANETA: &str = r##"<!DOCTYPE html>
<html>
<body>
<section data-testid="find-results-section-name">
  <ul class="ipc-metadata-list">
    <li class="ipc-metadata-list-summary-item find-result-item find-name-result">
      <div class="ipc-metadata-list-summary-item__c">
        <a class="ipc-metadata-list-summary-item__t" href="/name/nm0144657/?ref_=fn_nm_nm_1">Dan Castellaneta</a>
        <span>Actor, The Simpsons (1989)</span>
      </div>
    </li>
  </ul>
</section>
</body>
</html>"##;
